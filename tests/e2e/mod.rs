mod helpers;
mod scenarios;
mod config_tests;
