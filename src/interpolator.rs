use std::borrow::Cow;
use std::collections::HashMap;

use tracing::trace;

use crate::config::{Coercion, Options};
use crate::context::Resolver;
use crate::error::Error;
use crate::modifier::Modifier;
use crate::path::resolve_path;
use crate::scanner::{Scanner, Token};
use crate::value::Value;

/// Values resolved during one render, keyed by raw variable name.
///
/// Absence is cached too, and callables are forced before insertion so each
/// one runs at most once per render.
#[derive(Debug, Default)]
pub(crate) struct Cache {
    entries: HashMap<String, Option<Value>>,
}

impl Cache {
    fn lookup(
        &mut self,
        name: &str,
        resolver: &dyn Resolver,
        coercion: Option<Coercion>,
    ) -> Option<Value> {
        if let Some(hit) = self.entries.get(name) {
            trace!(name, "variable cache hit");
            return hit.clone();
        }

        let value = resolve_path(name, resolver)
            .map(Value::force)
            .map(|v| match (v, coercion) {
                (Value::Str(s), Some(coerce)) => coerce(&s),
                (v, _) => v,
            });
        self.entries.insert(name.to_string(), value.clone());
        value
    }

    pub(crate) fn assign(&mut self, name: &str, value: Value) {
        trace!(name, %value, "variable assigned");
        self.entries.insert(name.to_string(), Some(value));
    }
}

/// Output of a render in progress. Stays a typed value only while nothing
/// else has been written next to it.
#[derive(Debug)]
enum Accumulator {
    Text(String),
    Value(Value),
}

impl Accumulator {
    fn push_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        match self {
            Accumulator::Text(text) => text.push_str(s),
            Accumulator::Value(value) => *self = Accumulator::Text(format!("{value}{s}")),
        }
    }

    fn push_value(&mut self, value: Value) {
        match self {
            Accumulator::Text(text) if text.is_empty() => match value {
                Value::Str(s) => *text = s,
                other => *self = Accumulator::Value(other),
            },
            Accumulator::Text(text) => text.push_str(&value.to_string()),
            Accumulator::Value(prev) => *self = Accumulator::Text(format!("{prev}{value}")),
        }
    }

    fn finish(self) -> Value {
        match self {
            Accumulator::Text(text) => Value::Str(text),
            Accumulator::Value(value) => value,
        }
    }
}

/// Substitutes variables from a resolver into templates.
pub struct Interpolator<'a> {
    resolver: &'a dyn Resolver,
    options: &'a Options,
}

impl<'a> Interpolator<'a> {
    /// Borrow a resolver and options for any number of renders.
    pub fn new(resolver: &'a dyn Resolver, options: &'a Options) -> Self {
        Self { resolver, options }
    }

    /// Render a template into a typed value.
    ///
    /// When the input is exactly one variable reference the resolved value is
    /// returned as is, so `${server}` can yield a whole map. Otherwise the pieces
    /// are concatenated into a string. Unset variables render as nothing.
    pub fn render(&self, input: &str) -> Result<Value, Error> {
        if !input.contains('$') {
            return Ok(Value::Str(input.to_string()));
        }

        let mut scanner = Scanner::new(input)
            .with_special_vars(&self.options.special_vars)
            .with_ignore_errors(self.options.ignore_errors);
        let mut cache = Cache::default();
        let mut output = Accumulator::Text(String::new());

        while let Some((token, _)) = scanner.scan_next()? {
            match token {
                Token::Literal(s) => output.push_str(s),
                Token::Variable { name, modifier } => {
                    if let Some(value) = self.substitute(name, modifier, &mut cache)? {
                        if !value.is_null() {
                            output.push_value(value);
                        }
                    }
                }
            }
        }

        Ok(output.finish())
    }

    /// Render a template into a string with plain placeholder lookup.
    ///
    /// Only `${path}` and `%{path}` are substituted. Placeholders whose variable
    /// is unset or null keep their original text, so `${missing}` stays
    /// `${missing}`; modifiers and unbraced names are never interpreted.
    /// Returns `Cow::Borrowed` if nothing was substituted.
    pub fn render_to_string<'b>(&self, input: &'b str) -> Cow<'b, str> {
        if !input.contains("${") && !input.contains("%{") {
            return Cow::Borrowed(input);
        }

        let mut scanner = Scanner::new(input);
        let mut cache = Cache::default();
        let mut result: Option<String> = None;

        while let Some((token, range)) = scanner.scan_placeholder() {
            let value = match token {
                Token::Variable { name, .. } => cache
                    .lookup(name, self.resolver, self.options.coercion)
                    .filter(|v| !v.is_null()),
                Token::Literal(_) => None,
            };

            match value {
                Some(value) => {
                    let res = result.get_or_insert_with(|| {
                        let mut s = String::with_capacity(input.len() + 32);
                        s.push_str(&input[..range.start]);
                        s
                    });
                    res.push_str(&value.to_string());
                }
                None => {
                    if let Some(res) = &mut result {
                        res.push_str(&input[range]);
                    }
                }
            }
        }

        result.map_or(Cow::Borrowed(input), Cow::Owned)
    }

    fn substitute(
        &self,
        name: &str,
        modifier: Option<Modifier<'_>>,
        cache: &mut Cache,
    ) -> Result<Option<Value>, Error> {
        let value = cache.lookup(name, self.resolver, self.options.coercion);
        match modifier {
            Some(modifier) => modifier.apply(name, value, cache),
            None => Ok(value),
        }
    }
}
