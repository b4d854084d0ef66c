//! # Provider Modules
//!
//! Shapes expected by the cloud provider APIs.
//!
//! The translator depends on these types only. Whatever SDK or HTTP client
//! eventually submits them lives outside this crate.

pub mod azure;
