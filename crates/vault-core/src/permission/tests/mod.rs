pub mod superperms_tests;
