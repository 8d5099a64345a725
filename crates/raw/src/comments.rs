//! Comment stripping.

/// Removes `--` comments from every line of `text`.
///
/// A `--` inside a single-quoted string is kept. Line structure is
/// preserved so that source line numbers stay valid.
pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(strip_line(line));
    }
    out
}

fn strip_line(line: &str) -> &str {
    let bytes = line.as_bytes();
    let mut in_quote = false;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'\'' => in_quote = !in_quote,
            b'-' if !in_quote && bytes.get(i + 1) == Some(&b'-') => return line[..i].trim_end(),
            _ => {}
        }
    }
    line
}
