//! HTTP client for the resource data service

mod client;

pub use client::*;
