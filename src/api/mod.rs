//! HTTP API Client

pub mod client;

pub use client::*;
