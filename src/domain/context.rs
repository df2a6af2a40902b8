// Variable context: the name -> value mapping a template expands against

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::error::ContextError;

/// A context value. Only these three shapes exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(String),
    List(Vec<String>),
    /// Index-keyed entries only occur when the raw keys mixed indexes and
    /// names, or were out of order; they render as bare values.
    Map(Vec<(Key, String)>),
}

/// Key of a raw associative entry, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Index(usize),
    Name(String),
}

impl Key {
    /// Canonical non-negative integers ("0", "12", but not "01") become indexes.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<usize>() {
            Ok(index) if index.to_string() == raw => Key::Index(index),
            _ => Key::Name(raw.to_string()),
        }
    }
}

impl Value {
    pub fn scalar(value: impl Into<String>) -> Self {
        Value::Scalar(value.into())
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a map from text keys. Keys go through [`Key::parse`], so `"0"`
    /// is an index key exactly as it would be when loaded from JSON.
    pub fn map<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Value::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (Key::parse(k.as_ref()), v.into()))
                .collect(),
        )
    }

    /// Classify a raw keyed sequence.
    ///
    /// The entries form a `List` only when the keys are exactly `0, 1, .., n-1`
    /// in that order. Anything else, including a mix of index and name keys,
    /// is a `Map` that keeps the entry order and each entry's key kind.
    pub fn from_entries(entries: Vec<(Key, String)>) -> Self {
        let sequential = entries
            .iter()
            .enumerate()
            .all(|(position, (key, _))| *key == Key::Index(position));

        if sequential {
            Value::List(entries.into_iter().map(|(_, v)| v).collect())
        } else {
            Value::Map(entries)
        }
    }

    /// Lists and maps with no elements produce no fragments.
    pub fn is_empty_collection(&self) -> bool {
        match self {
            Value::Scalar(_) => false,
            Value::List(items) => items.is_empty(),
            Value::Map(pairs) => pairs.is_empty(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "scalar",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Scalar(value)
    }
}

impl<S: Into<String>> From<Vec<S>> for Value {
    fn from(items: Vec<S>) -> Self {
        Value::list(items)
    }
}

/// Ordered mapping from variable name to [`Value`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    variables: IndexMap<String, Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.variables.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn from_json_str(json: &str) -> Result<Self, ContextError> {
        let value: JsonValue = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ContextError> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        Self::from_json_value(yaml_to_json(value)?)
    }

    /// Build a context from a JSON object.
    ///
    /// `null` entries are skipped so the variable stays undefined. Booleans and
    /// nested containers are rejected.
    pub fn from_json_value(value: JsonValue) -> Result<Self, ContextError> {
        let object = match value {
            JsonValue::Object(object) => object,
            other => return Err(ContextError::NotAnObject(json_kind(&other).to_string())),
        };

        let mut context = Context::new();
        for (name, raw) in object {
            let value = match raw {
                JsonValue::Null => continue,
                JsonValue::String(s) => Value::Scalar(s),
                JsonValue::Number(n) => Value::Scalar(n.to_string()),
                JsonValue::Array(items) => {
                    let items = items
                        .into_iter()
                        .map(|item| scalar_text(&name, item))
                        .collect::<Result<Vec<_>, _>>()?;
                    Value::List(items)
                }
                JsonValue::Object(entries) => {
                    let entries = entries
                        .into_iter()
                        .map(|(key, item)| -> Result<(Key, String), ContextError> {
                            Ok((Key::parse(&key), scalar_text(&name, item)?))
                        })
                        .collect::<Result<Vec<_>, _>>()?;
                    Value::from_entries(entries)
                }
                JsonValue::Bool(_) => {
                    return Err(ContextError::UnsupportedValue {
                        name,
                        kind: "boolean".to_string(),
                    })
                }
            };
            tracing::trace!(variable = %name, kind = value.kind(), "loaded context variable");
            context.variables.insert(name, value);
        }

        Ok(context)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = Context::new();
        for (name, value) in iter {
            context.insert(name, value);
        }
        context
    }
}

fn scalar_text(name: &str, item: JsonValue) -> Result<String, ContextError> {
    match item {
        JsonValue::String(s) => Ok(s),
        JsonValue::Number(n) => Ok(n.to_string()),
        other => Err(ContextError::UnsupportedValue {
            name: name.to_string(),
            kind: format!("{} inside a list or map", json_kind(&other)),
        }),
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

// YAML allows non-string mapping keys; numbers become their text so that
// `{0: a, 1: b}` classifies the same way as the JSON object `{"0": "a", "1": "b"}`.
fn yaml_to_json(value: serde_yaml::Value) -> Result<JsonValue, ContextError> {
    use serde_yaml::Value as Yaml;

    Ok(match value {
        Yaml::Null => JsonValue::Null,
        Yaml::Bool(b) => JsonValue::Bool(b),
        Yaml::Number(n) => serde_json::to_value(&n)?,
        Yaml::String(s) => JsonValue::String(s),
        Yaml::Sequence(items) => JsonValue::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<_, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut object = serde_json::Map::new();
            for (key, item) in mapping {
                let key = match key {
                    Yaml::String(s) => s,
                    Yaml::Number(n) => n.to_string(),
                    other => {
                        return Err(ContextError::Parse(format!(
                            "unsupported mapping key: {:?}",
                            other
                        )))
                    }
                };
                object.insert(key, yaml_to_json(item)?);
            }
            JsonValue::Object(object)
        }
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}
