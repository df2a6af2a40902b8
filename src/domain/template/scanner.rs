// Expression scanner: locates `{...}` expressions in template text
//
// Grammar:
//   expression = '{' operator? varspec (',' varspec)* '}'
//   varspec    = name '*'? (':' digit+)?
//   name       = unit ('.'? unit)*
//   unit       = [A-Za-z0-9_] | '%' hex hex
//
// Text that does not match is never an error; the scanner simply moves on to
// the next opening brace.

use super::ast::{Expression, Operator, VarSpec};
use super::operator::ExpansionLevel;

pub struct ExpressionScanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> ExpressionScanner<'a> {
    /// Find the leftmost expression that starts at or after byte offset `from`
    /// and whose operator is supported by `level`.
    pub fn find(template: &'a str, from: usize, level: ExpansionLevel) -> Option<Expression> {
        let mut start = from;

        while let Some(offset) = template.get(start..)?.find('{') {
            let open = start + offset;
            let mut scanner = Self {
                input: template,
                pos: open,
            };

            match scanner.scan_expression() {
                Some(expr) if level.supports(expr.operator) => return Some(expr),
                _ => start = open + 1,
            }
        }

        None
    }

    fn scan_expression(&mut self) -> Option<Expression> {
        let open = self.pos;
        self.expect_char('{')?;

        let operator = match self.peek_char().and_then(Operator::from_char) {
            Some(op) => {
                self.consume_char()?;
                op
            }
            None => Operator::Simple,
        };

        let mut variables = vec![self.scan_varspec()?];
        loop {
            match self.consume_char()? {
                ',' => variables.push(self.scan_varspec()?),
                '}' => break,
                _ => return None,
            }
        }

        Some(Expression {
            operator,
            variables,
            span: open..self.pos,
        })
    }

    fn scan_varspec(&mut self) -> Option<VarSpec> {
        let name = self.scan_name()?;
        let mut spec = VarSpec::new(name);

        if self.peek_char() == Some('*') {
            self.consume_char()?;
            spec.explode = true;
        }

        if self.peek_char() == Some(':') {
            self.consume_char()?;
            let digits = self.take_while(|ch| ch.is_ascii_digit());
            if digits.is_empty() {
                return None;
            }
            // All digits, so parsing only fails on overflow
            spec.prefix_length = Some(digits.parse::<usize>().unwrap_or(usize::MAX));
        }

        Some(spec)
    }

    fn scan_name(&mut self) -> Option<String> {
        let start = self.pos;
        self.scan_name_unit()?;

        loop {
            match self.peek_char() {
                Some('.') => {
                    self.consume_char()?;
                    self.scan_name_unit()?;
                }
                Some(ch) if is_name_char(ch) || ch == '%' => {
                    self.scan_name_unit()?;
                }
                _ => break,
            }
        }

        Some(self.input[start..self.pos].to_string())
    }

    fn scan_name_unit(&mut self) -> Option<()> {
        match self.consume_char()? {
            ch if is_name_char(ch) => Some(()),
            '%' => {
                for _ in 0..2 {
                    if !self.consume_char()?.is_ascii_hexdigit() {
                        return None;
                    }
                }
                Some(())
            }
            _ => None,
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(ch) = self.peek_char() {
            if !pred(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
        &self.input[start..self.pos]
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn consume_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn expect_char(&mut self, expected: char) -> Option<()> {
        (self.consume_char()? == expected).then_some(())
    }
}

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
