// Common test utilities shared across test files

use uritemplate::{Context, Value};

/// The two-variable context used by the operator tests
#[allow(dead_code)]
pub fn foo_bar_context() -> Context {
    Context::new().with("var1", "foo").with("var2", "bar")
}

/// Context exercising every value shape
#[allow(dead_code)]
pub fn mixed_context() -> Context {
    Context::new()
        .with("var0", "bob")
        .with("var1", "hello")
        .with("var2", vec!["12", "23", "43"])
        .with("var3", Value::map([("foo", "bar"), ("baz", "yay")]))
}

/// Context for the full URI construction example
#[allow(dead_code)]
pub fn api_context() -> Context {
    Context::new()
        .with("schema", "http")
        .with("domain", "api.foo")
        .with("tld", vec!["co", "uk"])
        .with("resource", vec!["search", "entries"])
        .with("format", "json")
        .with("query", Value::map([("q", "bar"), ("sort_by", "recent")]))
}
