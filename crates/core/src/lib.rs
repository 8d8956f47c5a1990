//! Core library for libris
//!
//! This crate is the **Functional Core** of the libris service. Everything here is a
//! pure transformation with zero I/O; the `libris` binary crate owns the HTTP server,
//! the SQLite store and the CLI, and calls into these functions.
//!
//! # Module Organization
//!
//! - [`url`]: URL normalization (`canonical`, `redirection`, `all`)
//! - [`books`]: Book records, input validation, partial updates and page parameters
//! - [`responses`]: JSON request and response bodies for the HTTP API
//!
//! # Example Usage
//!
//! ```rust
//! use libris_core::url::process_url;
//!
//! let processed = process_url("https://BYFOOD.com/food-EXPeriences?query=abc/", "all").unwrap();
//! assert_eq!(processed, "https://www.byfood.com/food-experiences");
//! ```

pub mod books;
pub mod responses;
pub mod url;
