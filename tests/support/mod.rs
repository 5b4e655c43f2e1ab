//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod progress;
pub mod raw_server;
