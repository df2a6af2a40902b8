// Operator table: formatting policy per expression operator

use serde::{Deserialize, Serialize};

use super::ast::Operator;

/// How an expression's fragments are joined and encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorPolicy {
    /// Emitted once before the joined fragments, only if there are any.
    pub prefix: &'static str,
    pub separator: &'static str,
    /// Scalars render as `name=value`.
    pub form_style: bool,
    /// When false, reserved characters pass through unescaped.
    pub encode_reserved: bool,
}

impl OperatorPolicy {
    const fn new(
        prefix: &'static str,
        separator: &'static str,
        form_style: bool,
        encode_reserved: bool,
    ) -> Self {
        Self {
            prefix,
            separator,
            form_style,
            encode_reserved,
        }
    }
}

impl Operator {
    pub fn policy(self) -> OperatorPolicy {
        match self {
            Operator::Simple => OperatorPolicy::new("", ",", false, true),
            Operator::Reserved => OperatorPolicy::new("", ",", false, false),
            Operator::Fragment => OperatorPolicy::new("#", ",", false, false),
            Operator::Label => OperatorPolicy::new(".", ".", false, true),
            Operator::PathSegment => OperatorPolicy::new("/", "/", false, true),
            Operator::PathParameter => OperatorPolicy::new(";", ";", true, true),
            Operator::FormQuery => OperatorPolicy::new("?", "&", true, true),
            Operator::FormContinuation => OperatorPolicy::new("&", "&", true, true),
        }
    }
}

/// Which operators an expander recognizes.
///
/// `Basic` only knows simple, `+` and `#` expressions; any other expression is
/// left in the output as literal text rather than rendered as a simple
/// expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpansionLevel {
    Basic,
    #[default]
    Full,
}

impl ExpansionLevel {
    pub fn supports(self, operator: Operator) -> bool {
        match self {
            ExpansionLevel::Full => true,
            ExpansionLevel::Basic => matches!(
                operator,
                Operator::Simple | Operator::Reserved | Operator::Fragment
            ),
        }
    }
}
