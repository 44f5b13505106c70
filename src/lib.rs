//! serp: a JSON search endpoint over scraped result pages.
//!
//! The heavy lifting lives in [`serp_extract`]; this crate adds the request
//! boundary (`GET /api/search?q=`), host configuration and logging setup.

pub mod config;
pub mod error;
pub mod server;

pub use config::HostConfig;
pub use error::{HostError, Result};
pub use server::{router, run_server};
