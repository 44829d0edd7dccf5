//! Ternary expression to if/else statement

use super::{indent, shape_mismatch, verbatim, TransformError};
use crate::normalize::normalize;
use crate::options::TransformOptions;
use crate::syntax::{NodeKind, SyntaxNode};

/// Rewrite a conditional expression as an if/else statement
///
/// Each branch becomes `return <branch>`, except a branch that is itself a
/// conditional, which becomes a nested if/else one indentation unit deeper.
/// The output starts at column zero; callers place it.
pub fn to_if_else(
    node: &SyntaxNode,
    source: &str,
    options: &TransformOptions,
) -> Result<String, TransformError> {
    let SyntaxNode::Conditional {
        condition,
        when_true,
        when_false,
        ..
    } = normalize(node)
    else {
        return Err(shape_mismatch(NodeKind::Conditional, normalize(node)));
    };

    let condition = verbatim(condition, source)?;
    let when_true = branch(when_true, source, options)?;
    let when_false = branch(when_false, source, options)?;

    Ok(format!(
        "if ({condition}) {{\n{}\n}} else {{\n{}\n}}",
        indent(&when_true, &options.indent_unit),
        indent(&when_false, &options.indent_unit),
    ))
}

fn branch(node: &SyntaxNode, source: &str, options: &TransformOptions) -> Result<String, TransformError> {
    let inner = normalize(node);
    match inner {
        SyntaxNode::Conditional { .. } => to_if_else(inner, source, options),
        _ => Ok(format!("return {}", verbatim(inner, source)?)),
    }
}
