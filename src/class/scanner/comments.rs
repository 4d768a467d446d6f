//! Comment removal ahead of structural scanning.
//!
//! Precondition: well-formed source without comment-like sequences inside
//! string or character literals. `"http://x"` loses everything after `//`.

/// Remove line and block comments from `source`.
///
/// Line comments go first (up to but not including the newline), then block
/// comments, where the nearest `*/` closes each `/*`. A block comment is
/// replaced by the newlines it spanned so line numbers stay stable. An
/// unterminated `/*` is left in place.
pub fn strip_comments(source: &str) -> String {
    strip_block_comments(&strip_line_comments(source))
}

fn strip_line_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());

    for line in source.split_inclusive('\n') {
        match line.find("//") {
            Some(start) => {
                out.push_str(&line[..start]);
                if line.ends_with('\n') {
                    out.push('\n');
                }
            }
            None => out.push_str(line),
        }
    }

    out
}

fn strip_block_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(open) = rest.find("/*") {
        let Some(close) = rest[open + 2..].find("*/") else {
            break;
        };
        let close = open + 2 + close;

        out.push_str(&rest[..open]);
        let newlines = rest[open..close].matches('\n').count();
        out.extend(std::iter::repeat_n('\n', newlines));
        rest = &rest[close + 2..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn removes_line_comment_and_keeps_newline() {
        let stripped = strip_comments("int a; // trailing\nint b;");
        assert_eq!(stripped, "int a; \nint b;");
    }

    #[test]
    fn removes_block_comment_across_lines() {
        let stripped = strip_comments("a /* one\ntwo\nthree */ b");
        assert_eq!(stripped, "a \n\n b");
        assert_eq!(stripped.lines().count(), 3);
    }

    #[test]
    fn first_close_wins() {
        assert_eq!(strip_comments("x /* a */ y /* b */ z"), "x  y  z");
    }

    #[test]
    fn unterminated_block_is_kept() {
        assert_eq!(strip_comments("x /* never closed"), "x /* never closed");
    }

    #[test]
    fn stripping_is_idempotent() {
        let samples = [
            "class A { // c\n int x; /* d */ }",
            "//* tricky */ int a;\n/* a // b */ c\n x */",
            "/*/* nested */ */ tail",
            "a/*x*//b\n*/*c*//",
        ];

        for sample in samples {
            let once = strip_comments(sample);
            assert_eq!(strip_comments(&once), once, "not idempotent for {sample:?}");
        }
    }
}
