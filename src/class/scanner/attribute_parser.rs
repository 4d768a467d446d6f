use log::trace;

use crate::class::types::{AttributeRecord, Modifier};
use super::lexer::{tokenize, Token};

/// Try to read `[modifier] Type name ;` at the head of `tokens`.
///
/// Returns the record and how many tokens it consumed.
fn match_attribute(tokens: &[Token<'_>]) -> Option<(AttributeRecord, usize)> {
    let (modifier, rest, skipped) = match tokens.first()?.modifier() {
        Some(modifier) => (modifier, &tokens[1..], 1),
        None => (Modifier::Default, tokens, 0),
    };

    match rest {
        [ty, name, end, ..] if ty.is_member_type() && name.is_identifier() && end.is_punct(';') => {
            Some((
                AttributeRecord {
                    modifier,
                    type_name: ty.text.to_string(),
                    name: name.text.to_string(),
                },
                skipped + 3,
            ))
        }
        _ => None,
    }
}

/// Extract field declarations from one class body.
///
/// Anything that is not a bare `[modifier] Type name;` is skipped, which
/// includes fields with initialisers. A `static` or `final` between the
/// modifier and the type hides the modifier, so `public static int X;` is
/// read as a package-private `int`. Statements such as `return x;` or
/// `break outer;` inside method bodies never count.
pub fn parse_attributes(body: &str) -> Vec<AttributeRecord> {
    let tokens = tokenize(body);
    let mut attributes = Vec::new();
    let mut idx = 0;

    while idx < tokens.len() {
        match match_attribute(&tokens[idx..]) {
            Some((attribute, consumed)) => {
                trace!("Attribute {} {} {}", attribute.modifier, attribute.type_name, attribute.name);
                attributes.push(attribute);
                idx += consumed;
            }
            None => idx += 1,
        }
    }

    attributes
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn attr(modifier: Modifier, ty: &str, name: &str) -> AttributeRecord {
        AttributeRecord {
            modifier,
            type_name: ty.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn reads_fields_with_and_without_modifiers() {
        let body = "private int count; String label; protected List<String> tags; public byte[] raw;";

        assert_eq!(
            parse_attributes(body),
            vec![
                attr(Modifier::Private, "int", "count"),
                attr(Modifier::Default, "String", "label"),
                attr(Modifier::Protected, "List<String>", "tags"),
                attr(Modifier::Public, "byte[]", "raw"),
            ]
        );
    }

    #[test]
    fn ignores_methods_and_return_statements() {
        let body = "private int x; public int getX() { return x; } void reset(int v) { x = v; }";

        assert_eq!(parse_attributes(body), vec![attr(Modifier::Private, "int", "x")]);
    }

    #[test]
    fn statements_inside_bodies_are_not_fields() {
        let body = "void f() { outer: for (;;) { break outer; } assert ok; yield v; continue next; }";
        assert!(parse_attributes(body).is_empty());
    }

    #[test]
    fn static_field_loses_its_modifier() {
        assert_eq!(
            parse_attributes("public static int COUNT; private final String name;"),
            vec![
                attr(Modifier::Default, "int", "COUNT"),
                attr(Modifier::Default, "String", "name"),
            ]
        );
    }

    #[test]
    fn field_with_initialiser_is_not_a_match() {
        assert!(parse_attributes("private int x = 5;").is_empty());
    }
}
