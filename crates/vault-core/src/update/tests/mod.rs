pub mod update_tests;
