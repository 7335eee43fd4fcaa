//! HTTP adapter
//!
//! Reqwest-backed implementation of the outbound HTTP port.

pub mod client;

pub use client::ReqwestHttpClient;
