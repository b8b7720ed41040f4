//! Integration tests for slidecast

mod helpers;

mod cli_test;
mod controller_test;
mod deck_test;
mod timeline_test;
