use regex::Regex;

/// Glob pattern matched against whole type names.
///
/// Supports `*`, `?`, bracket classes (`[abc]`, `[a-z]`, `[!abc]`), brace
/// alternation (`{Where,OrderBy}Input`, nestable), backslash escapes and a
/// leading `!` to negate the whole pattern. There is no separator: `*` and
/// `?` match any character.
#[derive(Debug, Clone)]
pub struct GlobMatcher {
    regex: Regex,
    negated: bool,
}

impl GlobMatcher {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let mut negated = false;
        let mut pattern = pattern;
        while pattern.len() > 1 && pattern.starts_with('!') {
            negated = !negated;
            pattern = &pattern[1..];
        }

        let chars = pattern.chars().collect::<Vec<_>>();
        let regex = Regex::new(&format!("(?s)^(?:{})$", translate(&chars)))?;

        Ok(Self { regex, negated })
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input) != self.negated
    }
}

fn translate(chars: &[char]) -> String {
    let mut out = String::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\\' if i + 1 < chars.len() => {
                push_literal(&mut out, chars[i + 1]);
                i += 2;
            }
            '*' => {
                while i < chars.len() && chars[i] == '*' {
                    i += 1;
                }
                out.push_str(".*");
            }
            '?' => {
                out.push('.');
                i += 1;
            }
            '[' => match class_end(chars, i) {
                Some(end) => {
                    out.push_str(&translate_class(&chars[i + 1..end]));
                    i = end + 1;
                }
                None => {
                    push_literal(&mut out, '[');
                    i += 1;
                }
            },
            '{' => match brace_alternatives(chars, i) {
                Some((end, alternatives)) => {
                    let alternatives = alternatives
                        .iter()
                        .map(|alt| translate(alt))
                        .collect::<Vec<_>>();
                    out.push_str("(?:");
                    out.push_str(&alternatives.join("|"));
                    out.push(')');
                    i = end + 1;
                }
                None => {
                    push_literal(&mut out, '{');
                    i += 1;
                }
            },
            c => {
                push_literal(&mut out, c);
                i += 1;
            }
        }
    }

    out
}

fn push_literal(out: &mut String, c: char) {
    let mut buf = [0; 4];
    out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}

/// Index of the `]` closing the class opened at `start`.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut i = start + 1;
    if matches!(chars.get(i), Some('!') | Some('^')) {
        i += 1;
    }
    // a leading `]` is a member, not the terminator
    if chars.get(i) == Some(&']') {
        i += 1;
    }

    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            ']' => return Some(i),
            _ => i += 1,
        }
    }

    None
}

fn translate_class(body: &[char]) -> String {
    let mut out = String::from("[");
    let mut body = body;

    if let Some('!') | Some('^') = body.first() {
        out.push('^');
        body = &body[1..];
    }

    let mut i = 0;
    while i < body.len() {
        let c = match body[i] {
            '\\' if i + 1 < body.len() => {
                i += 1;
                body[i]
            }
            '-' if i > 0 && i + 1 < body.len() => {
                out.push('-');
                i += 1;
                continue;
            }
            c => c,
        };

        if matches!(c, '\\' | '[' | ']' | '^' | '-' | '&' | '~') {
            out.push('\\');
        }
        out.push(c);
        i += 1;
    }

    out.push(']');
    out
}

/// Splits the brace group opened at `start` into its top level alternatives.
///
/// Returns `None` when the group is unterminated or has no top level comma,
/// in which case the brace is matched literally.
fn brace_alternatives(chars: &[char], start: usize) -> Option<(usize, Vec<&[char]>)> {
    let mut depth = 0;
    let mut alternatives = Vec::new();
    let mut alt_start = start + 1;
    let mut i = start + 1;

    while i < chars.len() {
        match chars[i] {
            '\\' => {
                i += 2;
                continue;
            }
            '[' => {
                if let Some(end) = class_end(chars, i) {
                    i = end + 1;
                    continue;
                }
            }
            '{' => depth += 1,
            '}' if depth > 0 => depth -= 1,
            '}' => {
                if alternatives.is_empty() {
                    return None;
                }
                alternatives.push(&chars[alt_start..i]);
                return Some((i, alternatives));
            }
            ',' if depth == 0 => {
                alternatives.push(&chars[alt_start..i]);
                alt_start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    None
}
