//! Per-method route table
//!
//! Templates without placeholders go into an exact-match map; everything
//! else goes into that method's segment trie. Lookups try the map first.

use crate::pattern::is_dynamic;
use crate::{Match, Method, Params, RouteError, Trie};
use std::collections::HashMap;

/// One registered route, as reported by [`RouteTable::routes`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<'a, T> {
    pub method: Method,
    pub path: String,
    pub value: &'a T,
}

/// Route table keyed by method
///
/// # Example
/// ```
/// use waypost_router::{Method, RouteTable};
///
/// let mut table = RouteTable::new();
/// table.get("/users", "index").unwrap();
/// table.delete("/users/:id", "destroy").unwrap();
///
/// let m = table.lookup(Method::Head, "/users").unwrap();
/// assert_eq!(*m.value, "index");
///
/// let m = table.lookup(Method::Delete, "/users/7").unwrap();
/// assert_eq!(m.params["id"], "7");
/// ```
#[derive(Debug)]
pub struct RouteTable<T> {
    /// Method -> exact path -> value
    statics: HashMap<Method, HashMap<String, T>>,
    /// Method -> trie of placeholder templates
    dynamics: HashMap<Method, Trie<T>>,
}

impl<T> Default for RouteTable<T> {
    fn default() -> Self {
        Self {
            statics: HashMap::new(),
            dynamics: HashMap::new(),
        }
    }
}

impl<T> RouteTable<T> {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one method/template pair.
    ///
    /// Registering the same pair again replaces the value. Unlike the
    /// method helpers this does not add HEAD for GET.
    pub fn insert(&mut self, method: Method, template: &str, value: T) -> Result<(), RouteError> {
        if is_dynamic(template) {
            self.dynamics.entry(method).or_default().insert(template, value)?;
        } else {
            self.statics
                .entry(method)
                .or_default()
                .insert(template.to_string(), value);
        }
        Ok(())
    }

    /// Resolve a request.
    ///
    /// `None` means no route: the path is unknown for this method, the walk
    /// stopped early, or it ended on a node without a value.
    pub fn lookup(&self, method: Method, path: &str) -> Option<Match<'_, T>> {
        if let Some(value) = self.statics.get(&method).and_then(|paths| paths.get(path)) {
            return Some(Match {
                value,
                params: Params::new(),
            });
        }

        self.dynamics.get(&method)?.find(path)
    }

    /// Every registered route, sorted by path then method precedence
    pub fn routes(&self) -> Vec<Route<'_, T>> {
        let statics = self.statics.iter().flat_map(|(method, paths)| {
            paths.iter().map(|(path, value)| Route {
                method: *method,
                path: path.clone(),
                value,
            })
        });
        let dynamics = self.dynamics.iter().flat_map(|(method, trie)| {
            trie.routes().into_iter().map(|(path, value)| Route {
                method: *method,
                path,
                value,
            })
        });

        let mut routes: Vec<Route<'_, T>> = statics.chain(dynamics).collect();
        routes.sort_by(|a, b| a.path.cmp(&b.path).then(a.method.cmp(&b.method)));
        routes
    }
}

impl<T: Clone> RouteTable<T> {
    /// Add a GET route; HEAD gets the same value
    pub fn get(&mut self, path: &str, value: T) -> Result<(), RouteError> {
        self.insert(Method::Get, path, value.clone())?;
        self.insert(Method::Head, path, value)
    }

    /// Add a POST route
    pub fn post(&mut self, path: &str, value: T) -> Result<(), RouteError> {
        self.insert(Method::Post, path, value)
    }

    /// Add a PUT route
    pub fn put(&mut self, path: &str, value: T) -> Result<(), RouteError> {
        self.insert(Method::Put, path, value)
    }

    /// Add a PATCH route
    pub fn patch(&mut self, path: &str, value: T) -> Result<(), RouteError> {
        self.insert(Method::Patch, path, value)
    }

    /// Add a DELETE route
    pub fn delete(&mut self, path: &str, value: T) -> Result<(), RouteError> {
        self.insert(Method::Delete, path, value)
    }

    /// Add a route by method, with the GET/HEAD pairing applied
    pub fn route(&mut self, method: Method, path: &str, value: T) -> Result<(), RouteError> {
        match method {
            Method::Get => self.get(path, value),
            _ => self.insert(method, path, value),
        }
    }
}
