use crate::config::Options;
use crate::context::Resolver;
use crate::error::Error;
use crate::interpolator::Interpolator;
use crate::value::{Map, Value};

/// A per-string transform applied by [`render_structure_with`].
///
/// `key` is the original (unrendered) mapping key when `value` is a mapping
/// value, and `None` for keys themselves and for list elements.
pub trait Handler {
    fn handle(&self, value: &str, resolver: &dyn Resolver, key: Option<&str>) -> Result<Value, Error>;
}

impl<F> Handler for F
where
    F: Fn(&str, &dyn Resolver, Option<&str>) -> Result<Value, Error>,
{
    fn handle(&self, value: &str, resolver: &dyn Resolver, key: Option<&str>) -> Result<Value, Error> {
        self(value, resolver, key)
    }
}

/// Renders every string with [`Interpolator::render`].
#[derive(Debug, Clone)]
pub struct Substitute {
    pub options: Options,
}

impl Default for Substitute {
    fn default() -> Self {
        Self {
            options: Options::default().with_ignore_errors(true),
        }
    }
}

impl Handler for Substitute {
    fn handle(&self, value: &str, resolver: &dyn Resolver, _key: Option<&str>) -> Result<Value, Error> {
        Interpolator::new(resolver, &self.options).render(value)
    }
}

/// Renders every string with [`Interpolator::render_to_string`], leaving
/// unresolved placeholders in place.
#[derive(Debug, Clone, Default)]
pub struct Legacy {
    pub options: Options,
}

impl Handler for Legacy {
    fn handle(&self, value: &str, resolver: &dyn Resolver, _key: Option<&str>) -> Result<Value, Error> {
        let rendered = Interpolator::new(resolver, &self.options).render_to_string(value);
        Ok(Value::Str(rendered.into_owned()))
    }
}

/// Clone `node`, passing every string key and string value through `handler`.
///
/// Lists keep their order and length, maps keep their insertion order. Keys must
/// render to strings. Other leaves are copied unchanged.
pub fn walk<F>(node: &Value, handler: &mut F) -> Result<Value, Error>
where
    F: FnMut(&str, Option<&str>) -> Result<Value, Error>,
{
    walk_node(node, handler, None)
}

fn walk_node<F>(node: &Value, handler: &mut F, key: Option<&str>) -> Result<Value, Error>
where
    F: FnMut(&str, Option<&str>) -> Result<Value, Error>,
{
    match node {
        Value::Str(s) => handler(s.as_str(), key),
        Value::List(items) => items
            .iter()
            .map(|item| walk_node(item, handler, None))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        Value::Map(map) => {
            let mut out = Map::with_capacity(map.len());
            for (k, v) in map {
                let Value::Str(rendered) = handler(k.as_str(), None)? else {
                    return Err(Error::KeyNotString { key: k.clone() });
                };
                out.insert(rendered, walk_node(v, handler, Some(k.as_str()))?);
            }
            Ok(Value::Map(out))
        }
        other => Ok(other.clone()),
    }
}

/// Render every string in `node` against `resolver` with a custom handler.
pub fn render_structure_with<H>(node: &Value, resolver: &dyn Resolver, handler: &H) -> Result<Value, Error>
where
    H: Handler + ?Sized,
{
    walk(node, &mut |value: &str, key: Option<&str>| {
        handler.handle(value, resolver, key)
    })
}
