//! Common utilities for integration tests.

pub mod localstack;

pub use localstack::{CollectingOutput, LocalStackTestContext};
