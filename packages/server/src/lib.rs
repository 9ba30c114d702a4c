// Holy Books Facts Checker - API Core
//
// HTTP layer over the scripture_check pipeline. One inbound fact-check
// request maps to exactly one FactChecker call; history and export are
// read-only pass-throughs to the configured store.

pub mod config;
pub mod server;

pub use config::*;
