//! waypost-router: segment trie HTTP router
//!
//! The routing engine used by waypost-core. It knows nothing about
//! requests or responses; values stored per route are generic.
//!
//! ## Features
//! - Exact-match fast path for templates without placeholders
//! - One segment trie per method for templates with placeholders
//! - GET routes are also registered for HEAD
//! - Sorted route listing for diagnostics
//!
//! ## Path Syntax
//! - `/users/all` - literal segments
//! - `/users/:id` - named placeholder (captures one non-empty segment)
//!
//! ## Priority
//! 1. Exact match on the whole path
//! 2. Literal child at each trie level
//! 3. Placeholder children, in registration order
//!
//! The walk never backtracks: once a child is taken at one level, a miss
//! further down is a miss for the whole path.
//!
//! ## Example
//! ```
//! use waypost_router::{Method, RouteTable};
//!
//! let mut table = RouteTable::new();
//! table.get("/users", 0).unwrap();
//! table.get("/users/:id", 1).unwrap();
//!
//! let m = table.lookup(Method::Get, "/users/123").unwrap();
//! assert_eq!(*m.value, 1);
//! assert_eq!(m.params["id"], "123");
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

mod error;
mod method;
pub mod pattern;
mod printer;
mod table;
mod trie;

use std::collections::HashMap;

pub use error::RouteError;
pub use method::Method;
pub use printer::Printer;
pub use table::{Route, RouteTable};
pub use trie::Trie;

/// Captured placeholder values, keyed by name without the `:`
pub type Params = HashMap<String, String>;

/// Route match result
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a, T> {
    /// The matched value
    pub value: &'a T,
    /// Captured path parameters
    pub params: Params,
}
