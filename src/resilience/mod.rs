//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! View load:
//!     → timeouts.rs (enforce load deadline)
//!     → On failure: surface LoadFailure to the mount host
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every view fetch has a deadline
//! - No automatic retries: a failed load is not cached, so the next
//!   navigation to the same route tries again

pub mod timeouts;
