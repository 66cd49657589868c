//! Integration tests driving the full router in-process.

mod helpers;

mod auth_test;
mod session_test;
