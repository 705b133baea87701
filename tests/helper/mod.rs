//! Shared test utilities
#![allow(dead_code)]

pub mod wikipedia;

pub use wikipedia::*;
