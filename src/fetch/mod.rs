//! Fetch orchestration: the retry loop and the caller-facing API shapes.

mod client;

pub use client::{Fetcher, MAX_ATTEMPTS};
