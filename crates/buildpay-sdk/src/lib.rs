/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public BuildPay SDK crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Rust client SDK for the BuildPay wallet/payments API.
//!
//! A thin async wrapper: one method per REST endpoint, default-parameter
//! injection from [`Config`], and a normalized error taxonomy
//! ([`BuildPayError`]). No caching, no retries, no local state beyond the
//! configuration itself.

pub mod client;
pub mod config;
pub mod http;
pub mod types;

pub use client::BuildPayClient;
pub use config::Config;
pub use http::{BuildPayError, CustomerApi, Result, TransactionApi};
pub use types::*;
