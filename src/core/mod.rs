//! Core components of the `yhf-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`YhfClient`] and its builder.
//! - The primary [`YhfError`] type.
//! - Shared request parameters like [`Range`] and [`Interval`].
//! - Internal networking and timestamp helpers.

/// The main client (`YhfClient`), builder, and retry configuration.
pub mod client;
/// Timestamp and timezone helpers shared by the reshaping code.
pub mod conversions;
/// The primary error type (`YhfError`) for the crate.
pub mod error;
/// Query parameter enums (`Range`, `Interval`).
pub mod params;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::YhfClient`
pub use client::{Backoff, RetryConfig, YhfClient, YhfClientBuilder};
pub use error::YhfError;
pub use params::{Interval, Range};
