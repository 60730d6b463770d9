const GLOB_PREFIXES: [&str; 2] = ["matcher:", "match:"];

/// Caller supplied disambiguation hint for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint<'a> {
    /// `match:<glob>` or `matcher:<glob>`. `raw` keeps the prefix.
    Glob { raw: &'a str, pattern: &'a str },
    Substring(&'a str),
}

impl<'a> Hint<'a> {
    /// Empty strings carry no hint.
    pub fn parse(raw: &'a str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        let hint = GLOB_PREFIXES
            .iter()
            .find_map(|prefix| raw.strip_prefix(*prefix))
            .map(|pattern| Hint::Glob { raw, pattern })
            .unwrap_or(Hint::Substring(raw));

        Some(hint)
    }

    /// The full hint string, used for the substring fallback.
    pub fn raw(&self) -> &'a str {
        match self {
            Hint::Glob { raw, .. } => raw,
            Hint::Substring(raw) => raw,
        }
    }
}
