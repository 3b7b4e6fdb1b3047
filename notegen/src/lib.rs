//! Expose notegen's internal API for use in integration tests. While it
//! *could* be useful, we do not recommend depending on this API from
//! production code.
pub mod cli;
pub mod config;
pub mod error;
pub mod html;
#[cfg(feature = "serve")]
pub mod serve;
pub mod structure;
pub mod utils;
