#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A policy applied to every string read from the context before modifiers run.
pub type Coercion = fn(&str) -> Value;

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Single characters accepted as bare `$x` names (e.g. `$`, `?`)
    pub special_vars: Vec<char>,
    /// Recover from unterminated `${` instead of failing
    pub ignore_errors: bool,
    /// Optional string coercion, see [`crate::parse_variable`]
    #[cfg_attr(feature = "serde", serde(skip))]
    pub coercion: Option<Coercion>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_special_vars(mut self, vars: impl IntoIterator<Item = char>) -> Self {
        self.special_vars = vars.into_iter().collect();
        self
    }

    pub fn with_ignore_errors(mut self, ignore: bool) -> Self {
        self.ignore_errors = ignore;
        self
    }

    pub fn with_coercion(mut self, coercion: Coercion) -> Self {
        self.coercion = Some(coercion);
        self
    }
}
