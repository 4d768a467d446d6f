use log::{debug, trace};

use crate::class::error::ParseError;
use super::lexer::{tokenize, Token};

/// The body of one class declaration found in comment-stripped source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassBody<'a> {
    /// Name of the class
    pub name: String,

    /// Superclass named by an `extends` clause, if any
    pub extends_from: Option<String>,

    /// Text strictly between the matched braces, trimmed
    pub body: &'a str,

    /// Byte offset just past the opening brace
    pub body_start: usize,
}

/// A recognised `class Name [extends Parent] {` header
struct Header<'a> {
    name: &'a str,
    parent: Option<&'a str>,
    /// Byte offset of the opening brace
    open_brace: usize,
    /// Number of tokens the header spans, brace included
    len: usize,
}

fn match_header<'a>(tokens: &[Token<'a>]) -> Option<Header<'a>> {
    match tokens {
        [kw, name, brace, ..]
            if kw.is_word("class") && name.is_identifier() && brace.is_punct('{') =>
        {
            Some(Header {
                name: name.text,
                parent: None,
                open_brace: brace.start,
                len: 3,
            })
        }
        [kw, name, ext, parent, brace, ..]
            if kw.is_word("class")
                && name.is_identifier()
                && ext.is_word("extends")
                && parent.is_identifier()
                && brace.is_punct('{') =>
        {
            Some(Header {
                name: name.text,
                parent: Some(parent.text),
                open_brace: brace.start,
                len: 5,
            })
        }
        _ => None,
    }
}

/// Find the brace that closes the one at `open`, counting depth over the rest
/// of `source`. Returns `None` when depth never returns to zero.
fn find_matching_brace(source: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;

    for (offset, byte) in source.as_bytes()[open..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }

    None
}

/// Scan `source` for class headers and cut out each class body.
///
/// Results come back in source order. A class whose body never closes is
/// reported as `ParseError::UnbalancedBraces` in its slot. Scanning resumes
/// right after each header, so headers nested inside a body are found too.
pub fn extract_class_bodies(source: &str) -> Vec<Result<ClassBody<'_>, ParseError>> {
    let tokens = tokenize(source);
    let mut results = Vec::new();
    let mut idx = 0;

    while idx < tokens.len() {
        let Some(header) = match_header(&tokens[idx..]) else {
            idx += 1;
            continue;
        };
        idx += header.len;

        match find_matching_brace(source, header.open_brace) {
            Some(close) => {
                let body_start = header.open_brace + 1;
                trace!("Class {} body spans {}..{}", header.name, body_start, close);
                results.push(Ok(ClassBody {
                    name: header.name.to_string(),
                    extends_from: header.parent.map(str::to_string),
                    body: source[body_start..close].trim(),
                    body_start,
                }));
            }
            None => {
                debug!("Class {} never closes its body", header.name);
                results.push(Err(ParseError::UnbalancedBraces {
                    class_name: header.name.to_string(),
                }));
            }
        }
    }

    results
}
