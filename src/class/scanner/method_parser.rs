use log::trace;

use crate::class::types::{MethodRecord, Modifier, ParameterRecord};
use super::lexer::{tokenize, Token};

/// Split a parameter list on commas outside angle brackets.
fn split_top_level(list: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (idx, c) in list.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth -= 1,
            ',' if depth <= 0 => {
                fragments.push(&list[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    fragments.push(&list[start..]);

    fragments
}

/// Parse the text between a method's parentheses.
///
/// Each fragment needs at least a type and a name once a leading `final` is
/// dropped; fragments that don't are skipped.
pub fn parse_parameters(list: &str) -> Vec<ParameterRecord> {
    split_top_level(list)
        .into_iter()
        .filter_map(|fragment| {
            let mut words: Vec<&str> = fragment.split_whitespace().collect();
            if words.first() == Some(&"final") {
                words.remove(0);
            }
            let (name, ty) = words.split_last()?;
            if ty.is_empty() {
                trace!("Skipping malformed parameter {:?}", fragment.trim());
                return None;
            }
            Some(ParameterRecord {
                type_name: ty.join(" "),
                name: name.to_string(),
            })
        })
        .collect()
}

/// Try to read `[modifier] Type name ( params )` followed by `{` at the head
/// of `tokens`. The brace is checked but not consumed.
fn match_method(body: &str, tokens: &[Token<'_>]) -> Option<(MethodRecord, usize)> {
    let (modifier, rest, skipped) = match tokens.first()?.modifier() {
        Some(modifier) => (modifier, &tokens[1..], 1),
        None => (Modifier::Default, tokens, 0),
    };

    let [ret, name, open, ..] = rest else {
        return None;
    };
    if !(ret.is_member_type() && name.is_identifier() && open.is_punct('(')) {
        return None;
    }

    let close = rest.iter().skip(3).position(|t| t.is_punct(')'))? + 3;
    if !rest.get(close + 1)?.is_punct('{') {
        return None;
    }

    let method = MethodRecord {
        modifier,
        return_type: ret.text.to_string(),
        method_name: name.text.to_string(),
        parameters: parse_parameters(&body[open.end..rest[close].start]),
    };
    Some((method, skipped + close + 1))
}

/// Extract method declarations from one class body.
///
/// Constructors carry no return type and never match; neither do abstract or
/// interface-style declarations ending in `;`. As with fields, a `static` or
/// `final` after the modifier hides it: `public static void main(..) {` is
/// recorded with the default modifier.
pub fn parse_methods(body: &str) -> Vec<MethodRecord> {
    let tokens = tokenize(body);
    let mut methods = Vec::new();
    let mut idx = 0;

    while idx < tokens.len() {
        match match_method(body, &tokens[idx..]) {
            Some((method, consumed)) => {
                trace!(
                    "Method {} {} {} with {} parameters",
                    method.modifier,
                    method.return_type,
                    method.method_name,
                    method.parameters.len()
                );
                methods.push(method);
                idx += consumed;
            }
            None => idx += 1,
        }
    }

    methods
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn param_types(method: &MethodRecord) -> Vec<&str> {
        method.parameters.iter().map(|p| p.type_name.as_str()).collect()
    }

    #[test]
    fn reads_modifier_return_type_name_and_parameters() {
        let methods = parse_methods("public int add(int a, final int b) { return a + b; }");

        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].modifier, Modifier::Public);
        assert_eq!(methods[0].return_type, "int");
        assert_eq!(methods[0].method_name, "add");
        assert_eq!(
            methods[0].parameters,
            vec![
                ParameterRecord { type_name: "int".to_string(), name: "a".to_string() },
                ParameterRecord { type_name: "int".to_string(), name: "b".to_string() },
            ]
        );
    }

    #[test]
    fn constructors_and_fields_are_not_methods() {
        let body = "private int x; public Point(int x) { this.x = x; } Point() { } void clear() { }";
        let methods = parse_methods(body);

        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].method_name, "clear");
        assert_eq!(methods[0].modifier, Modifier::Default);
        assert!(methods[0].parameters.is_empty());
    }

    #[test]
    fn static_method_loses_its_modifier() {
        let methods = parse_methods("public static void main(String[] args) { }");

        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].modifier, Modifier::Default);
        assert_eq!(methods[0].return_type, "void");
        assert_eq!(param_types(&methods[0]), vec!["String[]"]);
    }

    #[test]
    fn declaration_without_body_is_skipped() {
        assert!(parse_methods("abstract void draw();").is_empty());
        assert!(parse_methods("void draw() throws IOException { }").is_empty());
    }

    #[test]
    fn generic_parameter_keeps_its_commas() {
        let methods = parse_methods("void put(Map<String, Integer> counts, String key) { }");
        assert_eq!(param_types(&methods[0]), vec!["Map<String, Integer>", "String"]);
    }

    #[test]
    fn control_flow_is_not_mistaken_for_a_method() {
        let body = "void run() { if (a) { x(); } else if (b) { y(); } }";
        let methods = parse_methods(body);

        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].method_name, "run");
    }

    #[test_case("" ; "empty list")]
    #[test_case("int" ; "type without name")]
    #[test_case("final x" ; "final then one word")]
    #[test_case(" , " ; "bare commas")]
    fn malformed_parameters_are_dropped(list: &str) {
        assert!(parse_parameters(list).is_empty());
    }

    #[test]
    fn multi_word_parameter_type_is_rejoined() {
        let params = parse_parameters("final java.util.List < String >  items");
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].type_name, "java.util.List < String >");
        assert_eq!(params[0].name, "items");
    }
}
