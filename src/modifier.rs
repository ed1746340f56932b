use crate::error::Error;
use crate::interpolator::Cache;
use crate::value::Value;

/// A shell-style parameter operator written after `:` in `${NAME:...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier<'a> {
    /// `${NAME:+TEXT}` substitutes TEXT when NAME is set, otherwise nothing
    Alternate(&'a str),
    /// `${NAME:-TEXT}` substitutes TEXT when NAME is unset
    Default(&'a str),
    /// `${NAME:#}` substitutes the length of NAME
    Length,
    /// `${NAME:=TEXT}` like `Default`, and also assigns TEXT to NAME
    Assign(&'a str),
    /// `${NAME:?TEXT}` fails with TEXT when NAME is unset
    Required(&'a str),
}

impl<'a> Modifier<'a> {
    /// Parse the text following the first `:`. Unknown operators yield `None`,
    /// in which case the reference is a plain lookup of the name.
    pub fn parse(text: &'a str) -> Option<Self> {
        let mut chars = text.chars();
        let op = chars.next()?;
        let rest = chars.as_str();
        match op {
            '+' => Some(Modifier::Alternate(rest)),
            '-' => Some(Modifier::Default(rest)),
            '#' => Some(Modifier::Length),
            '=' => Some(Modifier::Assign(rest)),
            '?' => Some(Modifier::Required(rest)),
            _ => None,
        }
    }

    /// Evaluate against the already resolved `value` of `name`.
    pub(crate) fn apply(
        self,
        name: &str,
        value: Option<Value>,
        cache: &mut Cache,
    ) -> Result<Option<Value>, Error> {
        let set = value.as_ref().is_some_and(Value::is_truthy);
        match self {
            Modifier::Alternate(text) => Ok(Some(Value::from(if set { text } else { "" }))),
            Modifier::Default(text) => Ok(if set { value } else { Some(Value::from(text)) }),
            Modifier::Length => {
                let len = value.map_or(0, |v| v.to_string().chars().count());
                Ok(Some(Value::from(len)))
            }
            Modifier::Assign(text) => {
                if set {
                    return Ok(value);
                }
                cache.assign(name, Value::from(text));
                Ok(Some(Value::from(text)))
            }
            Modifier::Required(text) => {
                if set {
                    return Ok(value);
                }
                let message = if text.is_empty() {
                    "parameter null or not set".to_string()
                } else {
                    text.to_string()
                };
                Err(Error::RequiredVariableUnset {
                    name: name.to_string(),
                    message,
                })
            }
        }
    }
}
