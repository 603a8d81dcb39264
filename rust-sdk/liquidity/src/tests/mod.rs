mod utils;

mod session_test;
