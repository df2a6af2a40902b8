// Syntax types for URI template expressions

use std::ops::Range;

/// The optional leading character of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Simple,
    Reserved,
    Fragment,
    Label,
    PathSegment,
    PathParameter,
    FormQuery,
    FormContinuation,
}

impl Operator {
    /// Map an operator character to its operator. `None` means the character
    /// is not an operator and belongs to the first variable name instead.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Reserved),
            '#' => Some(Operator::Fragment),
            '.' => Some(Operator::Label),
            '/' => Some(Operator::PathSegment),
            ';' => Some(Operator::PathParameter),
            '?' => Some(Operator::FormQuery),
            '&' => Some(Operator::FormContinuation),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Operator::Simple => None,
            Operator::Reserved => Some('+'),
            Operator::Fragment => Some('#'),
            Operator::Label => Some('.'),
            Operator::PathSegment => Some('/'),
            Operator::PathParameter => Some(';'),
            Operator::FormQuery => Some('?'),
            Operator::FormContinuation => Some('&'),
        }
    }
}

/// One variable reference inside an expression, e.g. `list*` or `name:3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarSpec {
    pub name: String,
    pub explode: bool,
    pub prefix_length: Option<usize>,
}

impl VarSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            explode: false,
            prefix_length: None,
        }
    }

    pub fn with_explode(mut self, explode: bool) -> Self {
        self.explode = explode;
        self
    }

    pub fn with_prefix_length(mut self, length: usize) -> Self {
        self.prefix_length = Some(length);
        self
    }
}

/// A recognized `{...}` expression and where it sits in the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub operator: Operator,
    pub variables: Vec<VarSpec>,
    /// Byte range of the whole expression, braces included.
    pub span: Range<usize>,
}

impl Expression {
    /// The exact source text of the expression.
    pub fn raw<'a>(&self, template: &'a str) -> &'a str {
        &template[self.span.clone()]
    }
}
