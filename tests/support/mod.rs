//! Shared helpers for integration tests

#![allow(dead_code)]

pub mod console;
pub mod harness;
