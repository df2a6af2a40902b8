// Variable resolution: turns an expression into its rendered text

use tracing::trace;

use super::ast::{Expression, VarSpec};
use super::encoder::encode_value;
use super::operator::OperatorPolicy;
use crate::domain::context::{Context, Key, Value};

/// Resolves the variables of an expression against a context
pub struct VariableResolver<'c> {
    context: &'c Context,
}

impl<'c> VariableResolver<'c> {
    pub fn new(context: &'c Context) -> Self {
        Self { context }
    }

    /// Render a whole expression.
    ///
    /// Undefined variables and empty lists/maps contribute no fragments. If no
    /// variable contributes anything the expression renders as an empty
    /// string, without the operator prefix.
    pub fn render(&self, expr: &Expression) -> String {
        let policy = expr.operator.policy();
        let mut fragments = Vec::new();

        for spec in &expr.variables {
            self.render_variable(spec, policy, &mut fragments);
        }

        if fragments.is_empty() {
            return String::new();
        }

        let mut rendered = String::from(policy.prefix);
        rendered.push_str(&fragments.join(policy.separator));
        rendered
    }

    fn render_variable(&self, spec: &VarSpec, policy: OperatorPolicy, out: &mut Vec<String>) {
        let value = match self.context.get(&spec.name) {
            Some(value) if !value.is_empty_collection() => value,
            _ => {
                trace!(variable = %spec.name, "variable undefined, skipping");
                return;
            }
        };

        let encode = |s: &str| encode_value(s, policy.encode_reserved);

        match value {
            Value::Scalar(s) => {
                let raw = match spec.prefix_length {
                    Some(_) if spec.explode => {
                        trace!(variable = %spec.name, "explode set, prefix length ignored");
                        s.as_str()
                    }
                    Some(length) => truncate_chars(s, length),
                    None => s.as_str(),
                };

                let encoded = encode(raw);
                if policy.form_style {
                    out.push(format!("{}={}", spec.name, encoded));
                } else {
                    out.push(encoded);
                }
            }
            Value::List(items) => {
                if spec.prefix_length.is_some() {
                    trace!(variable = %spec.name, "prefix length ignored for list");
                }
                out.extend(items.iter().map(|item| encode(item)));
            }
            Value::Map(pairs) => {
                if spec.prefix_length.is_some() {
                    trace!(variable = %spec.name, "prefix length ignored for map");
                }
                for (key, item) in pairs {
                    match key {
                        Key::Index(_) => out.push(encode(item)),
                        Key::Name(name) if spec.explode => {
                            out.push(format!("{}={}", encode(name), encode(item)));
                        }
                        Key::Name(name) => {
                            out.push(encode(name));
                            out.push(encode(item));
                        }
                    }
                }
            }
        }
    }
}

/// First `length` characters of `s`, or all of it when shorter.
fn truncate_chars(s: &str, length: usize) -> &str {
    match s.char_indices().nth(length) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
