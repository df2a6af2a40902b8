// Expansion driver: scan, render, substitute until no expression is left

use tracing::debug;

use super::operator::ExpansionLevel;
use super::resolver::VariableResolver;
use super::scanner::ExpressionScanner;
use crate::config::yml_settings::ExpanderSettings;
use crate::domain::context::Context;

/// Expands templates at a fixed [`ExpansionLevel`].
///
/// Holds no per-call state, so one expander can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Expander {
    level: ExpansionLevel,
}

impl Expander {
    pub fn new(level: ExpansionLevel) -> Self {
        Self { level }
    }

    pub fn from_settings(settings: &ExpanderSettings) -> Self {
        Self::new(settings.level)
    }

    pub fn level(&self) -> ExpansionLevel {
        self.level
    }

    /// Expand every recognized expression in `template`.
    ///
    /// Each expression is replaced at its own span and the result is scanned
    /// again from the start, until no expression is left. A substitution can
    /// join literal braces around it into a new expression (`{{v}}` becomes
    /// `{x}`), so earlier text has to be looked at again. Every round removes
    /// one pair of braces, since rendered values never contain any.
    pub fn expand(&self, template: &str, context: &Context) -> String {
        let resolver = VariableResolver::new(context);
        let mut current = template.to_string();

        while let Some(expr) = ExpressionScanner::find(&current, 0, self.level) {
            let rendered = resolver.render(&expr);
            debug!(
                expression = expr.raw(&current),
                operator = ?expr.operator,
                rendered_len = rendered.len(),
                "expanded expression"
            );

            current.replace_range(expr.span, &rendered);
        }

        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::context::Value;

    #[test]
    fn test_expand_without_expressions() {
        let expander = Expander::default();
        let context = Context::new().with("var", "x");
        assert_eq!(
            expander.expand("http://foo.com/hello/world", &context),
            "http://foo.com/hello/world"
        );
    }

    #[test]
    fn test_repeated_expression_is_replaced_at_each_span() {
        let expander = Expander::default();
        let context = Context::new().with("v", "a");
        assert_eq!(expander.expand("{v}{v}/{v}", &context), "aa/a");
    }

    #[test]
    fn test_rendered_braces_are_encoded() {
        let expander = Expander::default();
        let context = Context::new().with("a", "{b}").with("b", "oops");
        assert_eq!(expander.expand("{+a}|{b}", &context), "%7Bb%7D|oops");
    }

    #[test]
    fn test_substitution_can_form_new_expression() {
        let expander = Expander::default();
        let context = Context::new().with("v", "x").with("x", "y").with("a", "A");
        assert_eq!(expander.expand("{{v}}", &context), "y");
        assert_eq!(expander.expand("{a{missing}}", &context), "A");
        assert_eq!(expander.expand("{{v}", &context), "{x");
    }

    #[test]
    fn test_malformed_expression_left_verbatim() {
        let expander = Expander::default();
        let context = Context::new().with("v", "x");
        assert_eq!(expander.expand("{v}{ v}{!v}{v", &context), "x{ v}{!v}{v");
    }

    #[test]
    fn test_basic_level_leaves_other_operators() {
        let expander = Expander::new(ExpansionLevel::Basic);
        let context = Context::new()
            .with("v", "welcome!")
            .with("list", Value::list(["a", "b"]));
        assert_eq!(
            expander.expand("{v}{+v}{#list}{?v}{/list}", &context),
            "welcome%21welcome!#a,b{?v}{/list}"
        );
    }

    #[test]
    fn test_from_settings() {
        let settings = ExpanderSettings {
            level: ExpansionLevel::Basic,
        };
        assert_eq!(Expander::from_settings(&settings).level(), ExpansionLevel::Basic);
    }
}
