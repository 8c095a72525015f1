//! The individual diagnostic checks.
//!
//! Each check is a free function that converts whatever it encounters into
//! one or more [`crate::record::CheckRecord`]s — no error escapes a check
//! and no check aborts the run. The [`crate::runner::DiagnosticRunner`]
//! invokes them in a fixed order.

pub mod clone;
pub mod dns;
pub mod git;
pub mod https;
pub mod network;
pub mod proxy;

pub use clone::clone_repository;
pub use dns::dns_resolution;
pub use git::tool_and_config;
pub use https::https_reachability;
pub use network::network_reachability;
pub use proxy::proxy_environment;
