//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Build loader → Compile routes → Create mount host
//!
//! The host then lives for the whole application run; navigation state is
//! never torn down.
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then views, then routing, then the host
//! - Fail fast on misconfiguration, before the first navigation

pub mod startup;

pub use startup::{build_host, build_loader, build_resolver, StartupError};
