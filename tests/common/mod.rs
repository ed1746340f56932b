use popu::{Context, Value};

#[allow(dead_code)]
pub fn map<const N: usize>(entries: [(&str, Value); N]) -> Value {
    entries.into_iter().collect()
}

#[allow(dead_code)]
pub fn list<const N: usize>(items: [Value; N]) -> Value {
    Value::List(items.into())
}

/// The shared shell-like environment used by the flat render tests.
#[allow(dead_code)]
pub fn create_env() -> Context {
    Context::new()
        .with("name", "ciccio")
        .with("questoXX", "aahhh")
        .with("BOH", 1)
        .with("PWD", "/Users/andreax")
        .with("?", 0)
        .with("f", Value::lazy(|| Value::from(295)))
        .with("$", 12345)
}
