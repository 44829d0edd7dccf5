//! If/else statement to ternary expression

use super::{shape_mismatch, verbatim, TransformError};
use crate::normalize::normalize;
use crate::syntax::{NodeKind, SyntaxNode};

const UNDEFINED: &str = "undefined";

/// Rewrite an if/else statement as a ternary expression
///
/// A branch returning a value contributes that value; a bare `return` or a
/// missing else contributes `undefined`. An `if` in a branch (including an
/// `else if`) nests as another ternary. Any other statement is wrapped in an
/// immediately invoked arrow function.
pub fn to_ternary(node: &SyntaxNode, source: &str) -> Result<String, TransformError> {
    let SyntaxNode::If {
        condition,
        then_branch,
        else_branch,
        ..
    } = normalize(node)
    else {
        return Err(shape_mismatch(NodeKind::If, normalize(node)));
    };

    let condition = verbatim(condition, source)?;
    let when_true = branch(then_branch, source)?;
    let when_false = match else_branch {
        Some(else_branch) => branch(else_branch, source)?,
        None => UNDEFINED.to_string(),
    };

    Ok(format!("{condition} ? {when_true} : {when_false}"))
}

fn branch(node: &SyntaxNode, source: &str) -> Result<String, TransformError> {
    let inner = normalize(node);
    match inner {
        SyntaxNode::If { .. } => to_ternary(inner, source),
        SyntaxNode::Return {
            expression: Some(expression),
            ..
        } => Ok(verbatim(expression, source)?.to_string()),
        SyntaxNode::Return { expression: None, .. } => Ok(UNDEFINED.to_string()),
        _ => Ok(format!("(() => {{{}}})()", verbatim(inner, source)?)),
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crate::language_info::GrammarProfile;
    use crate::parser::parse_fragment;
    use pretty_assertions::assert_eq;

    fn convert(source: &str) -> Result<String, TransformError> {
        let tree = parse_fragment(source, GrammarProfile::Tsx).unwrap();
        to_ternary(&tree.items[0], &tree.source)
    }

    #[test]
    fn test_simple() {
        assert_eq!(
            convert("if (isOpen) { return 'open' } else { return 'closed' }").unwrap(),
            "isOpen ? 'open' : 'closed'"
        );
    }

    #[test]
    fn test_missing_else() {
        assert_eq!(convert("if (c) { return a }").unwrap(), "c ? a : undefined");
    }

    #[test]
    fn test_bare_return() {
        assert_eq!(
            convert("if (c) { return; } else { return b; }").unwrap(),
            "c ? undefined : b"
        );
    }

    #[test]
    fn test_unbraced_branches() {
        assert_eq!(convert("if (c) return a; else return b;").unwrap(), "c ? a : b");
    }

    #[test]
    fn test_non_return_branch_is_wrapped() {
        assert_eq!(
            convert("if (c) { doSomething(); } else { return b }").unwrap(),
            "c ? (() => {doSomething()})() : b"
        );
    }

    #[test]
    fn test_multi_statement_branch_is_wrapped_verbatim() {
        assert_eq!(
            convert("if (c) { log(a); return a; } else { return b }").unwrap(),
            "c ? (() => {{ log(a); return a; }})() : b"
        );
    }

    #[test]
    fn test_else_if_chain() {
        assert_eq!(
            convert("if (x === 1) { return 'one' } else if (x === 2) { return 'two' } else { return 'many' }")
                .unwrap(),
            "x === 1 ? 'one' : x === 2 ? 'two' : 'many'"
        );
    }

    #[test]
    fn test_nested_if_in_then_branch() {
        assert_eq!(
            convert("if (a) { if (b) { return 1 } else { return 2 } } else { return 3 }").unwrap(),
            "a ? b ? 1 : 2 : 3"
        );
    }

    #[test]
    fn test_condition_keeps_inner_parens() {
        assert_eq!(
            convert("if ((a || b)) { return 1 } else { return 2 }").unwrap(),
            "(a || b) ? 1 : 2"
        );
    }

    #[test]
    fn test_not_an_if() {
        assert_eq!(
            convert("return x;"),
            Err(TransformError::ShapeMismatch {
                expected: NodeKind::If,
                found: NodeKind::Return,
            })
        );
    }
}
