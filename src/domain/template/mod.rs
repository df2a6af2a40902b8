// Template module for RFC 6570 URI template expansion
//
// The scanner finds expressions, the operator table picks a formatting policy,
// the resolver renders each variable through the encoder, and the expander
// stitches the results back into the template.

mod ast;
mod encoder;
mod expander;
mod operator;
mod resolver;
mod scanner;

pub use ast::{Expression, Operator, VarSpec};
pub use encoder::{encode_value, is_reserved};
pub use expander::Expander;
pub use operator::{ExpansionLevel, OperatorPolicy};
pub use resolver::VariableResolver;
pub use scanner::ExpressionScanner;
