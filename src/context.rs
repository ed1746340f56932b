use std::collections::HashMap;

use crate::value::{Map, Value};

/// A source of top-level variables. Dotted paths are walked by the caller.
pub trait Resolver {
    /// Look up a variable by name. `None` means absent, which is distinct from a present null.
    fn get(&self, name: &str) -> Option<Value>;
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn get(&self, name: &str) -> Option<Value> {
        (**self).get(name)
    }
}

impl Resolver for Map {
    fn get(&self, name: &str) -> Option<Value> {
        indexmap::IndexMap::get(self, name).cloned()
    }
}

impl Resolver for HashMap<String, Value> {
    fn get(&self, name: &str) -> Option<Value> {
        HashMap::get(self, name).cloned()
    }
}

impl Resolver for HashMap<&str, &str> {
    fn get(&self, name: &str) -> Option<Value> {
        HashMap::get(self, name).map(|s| Value::from(*s))
    }
}

/// A map resolves by key and a list by decimal index; scalars resolve nothing.
impl Resolver for Value {
    fn get(&self, name: &str) -> Option<Value> {
        self.member(name).cloned()
    }
}

/// Adapts a closure into a [`Resolver`].
#[derive(Debug, Clone, Copy)]
pub struct FnResolver<F>(pub F);

impl<F: Fn(&str) -> Option<Value>> Resolver for FnResolver<F> {
    fn get(&self, name: &str) -> Option<Value> {
        (self.0)(name)
    }
}

pub fn from_fn<F: Fn(&str) -> Option<Value>>(f: F) -> FnResolver<F> {
    FnResolver(f)
}

/// A simple in-memory context that keeps insertion order.
#[derive(Debug, Clone, Default)]
pub struct Context {
    vars: Map,
}

impl Context {
    pub fn new() -> Self {
        Self { vars: Map::new() }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn into_value(self) -> Value {
        Value::Map(self.vars)
    }
}

impl Resolver for Context {
    fn get(&self, name: &str) -> Option<Value> {
        self.vars.get(name).cloned()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
