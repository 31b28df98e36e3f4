pub mod convert_tests;
