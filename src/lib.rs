//! Shell-style variable substitution for strings and nested data.
//!
//! ```
//! use popu::{render, Context, Value};
//!
//! let ctx = Context::new().with("user", "tentacles").with("port", 8080);
//! assert_eq!(render("${user}@localhost:${port}", &ctx).unwrap(), Value::from("tentacles@localhost:8080"));
//! assert_eq!(render("${port}", &ctx).unwrap(), Value::from(8080));
//! assert_eq!(render("${host:-localhost}", &ctx).unwrap(), Value::from("localhost"));
//! ```

mod coerce;
mod config;
mod context;
mod error;
mod interpolator;
pub mod modifier;
mod path;
pub mod scanner;
mod value;
mod walker;

use std::borrow::Cow;
use std::collections::BTreeSet;

pub use coerce::parse_variable;
pub use config::{Coercion, Options};
pub use context::{from_fn, Context, FnResolver, Resolver};
pub use error::Error;
pub use interpolator::Interpolator;
pub use path::resolve_path;
pub use value::{Lazy, Map, Value};
pub use walker::{render_structure_with, walk, Handler, Legacy, Substitute};

/// A reusable renderer owning its options and a base context.
#[derive(Debug, Clone, Default)]
pub struct Popu {
    options: Options,
    context: Context,
}

impl Popu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            context: Context::new(),
        }
    }

    /// Add a variable to the internal context.
    pub fn add_variable(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.context.insert(key, value);
    }

    /// Render a template into a typed value, see [`Interpolator::render`].
    pub fn render(&self, input: &str) -> Result<Value, Error> {
        Interpolator::new(&self.context, &self.options).render(input)
    }

    /// Render a template into a string, see [`Interpolator::render_to_string`].
    pub fn render_to_string<'b>(&self, input: &'b str) -> Cow<'b, str> {
        Interpolator::new(&self.context, &self.options).render_to_string(input)
    }

    /// Render every string key and value of a nested structure.
    pub fn render_structure(&self, node: &Value) -> Result<Value, Error> {
        let handler = Substitute {
            options: self.options.clone(),
        };
        render_structure_with(node, &self.context, &handler)
    }
}

/// Render `text` against `resolver` with default options.
pub fn render(text: &str, resolver: &dyn Resolver) -> Result<Value, Error> {
    render_with(text, resolver, &Options::default())
}

/// Render `text` against `resolver` with explicit options.
pub fn render_with(text: &str, resolver: &dyn Resolver, options: &Options) -> Result<Value, Error> {
    Interpolator::new(resolver, options).render(text)
}

/// Render `${path}` and `%{path}` placeholders in `text`, leaving unresolved ones as written.
pub fn render_to_string<'b>(text: &'b str, resolver: &dyn Resolver) -> Cow<'b, str> {
    Interpolator::new(resolver, &Options::default()).render_to_string(text)
}

/// Render every string key and value in `node`, recovering from malformed tokens.
pub fn render_structure(node: &Value, resolver: &dyn Resolver) -> Result<Value, Error> {
    render_structure_with(node, resolver, &Substitute::default())
}

/// Names of all variables referenced in `input`, sorted and de-duplicated.
pub fn find_variable_references(input: &str) -> Vec<String> {
    let mut scanner = scanner::Scanner::new(input).with_ignore_errors(true);
    let mut variables = BTreeSet::new();

    while let Ok(Some((token, _))) = scanner.scan_next() {
        if let scanner::Token::Variable { name, .. } = token {
            variables.insert(name.to_string());
        }
    }

    variables.into_iter().collect()
}
