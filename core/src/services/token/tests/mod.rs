//! Unit tests for the token service and blacklist

mod service_tests;
