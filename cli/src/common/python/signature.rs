//! Node-level checks for the handler signature.
//!
//! A definition qualifies when its parameter list holds exactly two plain
//! positional parameters, the first annotated with a bare mapping type name
//! (`event: dict`) and the second with an attribute reference ending in the
//! context type (`context: lambda_context.Context`).

use super::{HandlerDefinition, HandlerRules};
use tree_sitter::Node;

pub(super) fn handler_definition(
    function: Node<'_>,
    source: &[u8],
    rules: &HandlerRules,
) -> Option<HandlerDefinition> {
    let parameters = function.child_by_field_name("parameters")?;
    let mut cursor = parameters.walk();
    let params: Vec<Node<'_>> = parameters
        .named_children(&mut cursor)
        .filter(|p| p.kind() != "comment")
        .collect();

    let [event, context] = params.as_slice() else {
        return None;
    };
    let event_type = positional_annotation(*event)?;
    let context_type = positional_annotation(*context)?;

    if !is_bare_mapping(event_type, source, rules)
        || !is_context_reference(context_type, source, rules)
    {
        return None;
    }

    let name = function
        .child_by_field_name("name")?
        .utf8_text(source)
        .ok()?
        .to_string();
    Some(HandlerDefinition {
        name,
        line: function.start_position().row + 1,
    })
}

/// The annotation of a plain positional parameter, if it has one.
/// Splat parameters and unannotated parameters yield `None`.
fn positional_annotation(param: Node<'_>) -> Option<Node<'_>> {
    match param.kind() {
        "typed_parameter" => {
            // `*args: T` and `**kw: T` are typed_parameters too; the name
            // must be a plain identifier.
            let mut cursor = param.walk();
            let first = param.named_children(&mut cursor).next()?;
            if first.kind() != "identifier" {
                return None;
            }
            param.child_by_field_name("type")
        }
        "typed_default_parameter" => param.child_by_field_name("type"),
        _ => None,
    }
}

/// The expression inside an annotation, with `type` wrappers and redundant
/// parentheses removed: `(dict)` reads as `dict`.
fn annotation_expression(annotation: Node<'_>) -> Option<Node<'_>> {
    let mut expr = annotation;
    while matches!(expr.kind(), "type" | "parenthesized_expression") {
        let mut cursor = expr.walk();
        let inner = expr
            .named_children(&mut cursor)
            .find(|child| child.kind() != "comment")?;
        expr = inner;
    }
    Some(expr)
}

fn is_bare_mapping(annotation: Node<'_>, source: &[u8], rules: &HandlerRules) -> bool {
    let Some(expr) = annotation_expression(annotation) else {
        return false;
    };
    expr.kind() == "identifier"
        && expr
            .utf8_text(source)
            .is_ok_and(|name| rules.mapping_types.iter().any(|m| m == name))
}

fn is_context_reference(annotation: Node<'_>, source: &[u8], rules: &HandlerRules) -> bool {
    let Some(expr) = annotation_expression(annotation) else {
        return false;
    };
    let last_component = match expr.kind() {
        "attribute" => expr.child_by_field_name("attribute"),
        // Some grammar versions parse dotted annotations as `member_type`.
        "member_type" => {
            let mut cursor = expr.walk();
            let last = expr.named_children(&mut cursor).last();
            last
        }
        _ => None,
    };
    last_component
        .filter(|n| n.kind() == "identifier")
        .and_then(|n| n.utf8_text(source).ok())
        .is_some_and(|name| name == rules.context_type)
}
