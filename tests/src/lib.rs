//! # LedgerGuard Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── support.rs        # Key fixtures and the transaction builder
//! └── integration/      # Full-stack flows over in-memory stores
//!     ├── ante_flows.rs
//!     └── feegrant_flows.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p lg-tests
//!
//! # By category
//! cargo test -p lg-tests integration::ante_flows
//! cargo test -p lg-tests integration::feegrant_flows
//! ```

#![allow(dead_code)]

pub mod integration;
