//! Route listing
//!
//! ```text
//!      GET /tasks                                             => TaskIndex
//!     HEAD /tasks                                             => TaskIndex
//! ```

use crate::RouteTable;
use std::fmt;
use std::io;

/// Width of the right-aligned method column
pub const METHOD_WIDTH: usize = 8;

/// Width of the left-aligned path column
pub const PATH_WIDTH: usize = 50;

/// Displays every route of a table, one per line
pub struct Printer<'a, T> {
    table: &'a RouteTable<T>,
}

impl<'a, T: fmt::Display> Printer<'a, T> {
    pub fn new(table: &'a RouteTable<T>) -> Self {
        Self { table }
    }
}

impl<T: fmt::Display> fmt::Display for Printer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for route in self.table.routes() {
            writeln!(
                f,
                "{:>mw$} {:<pw$} => {}",
                route.method.as_str(),
                route.path,
                route.value,
                mw = METHOD_WIDTH,
                pw = PATH_WIDTH,
            )?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> RouteTable<T> {
    /// Write the route listing to a sink such as stdout
    pub fn print<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", Printer::new(self))
    }
}
