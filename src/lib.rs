//! RFC 6570 URI template expansion.
//!
//! ```
//! use uritemplate::{expand, Context, Value};
//!
//! let context = Context::new()
//!     .with("resource", vec!["search", "entries"])
//!     .with("query", Value::map([("q", "bar")]));
//!
//! assert_eq!(
//!     expand("http://api.foo{/resource}{?query*}", &context),
//!     "http://api.foo/search/entries?q=bar"
//! );
//! ```

pub mod config;
pub mod domain;
pub mod error;

pub use config::ExpanderSettings;
pub use domain::template::{Expander, ExpansionLevel};
pub use domain::{Context, Key, Value};
pub use error::ContextError;

/// Expand `template` with every operator (`+ # . / ; ? &`) supported.
pub fn expand(template: &str, context: &Context) -> String {
    Expander::new(ExpansionLevel::Full).expand(template, context)
}

/// Expand `template` recognizing only simple, `+` and `#` expressions.
///
/// Output matches [`expand`] for templates that use only those operators.
pub fn expand_basic(template: &str, context: &Context) -> String {
    Expander::new(ExpansionLevel::Basic).expand(template, context)
}
