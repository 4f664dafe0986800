//! Literal placeholder substitution.
//!
//! Templates carry fixed default values (`app = "nullclaw"`, `"3000:3000"`)
//! instead of a templating syntax. Replacement is exact string matching;
//! a placeholder that does not appear leaves the text untouched and is
//! reported back to the caller.

/// A placeholder and the text that replaces it.
///
/// `patterns` are alternatives: the placeholder counts as matched when any
/// of them occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub label: &'static str,
    pub patterns: Vec<String>,
    pub replacement: String,
}

impl Placeholder {
    pub fn new(
        label: &'static str,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self { label, patterns: vec![pattern.into()], replacement: replacement.into() }
    }

    pub fn any_of<I, S>(label: &'static str, patterns: I, replacement: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label,
            patterns: patterns.into_iter().map(Into::into).collect(),
            replacement: replacement.into(),
        }
    }
}

/// Result of substituting placeholders into a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub content: String,
    /// Labels of placeholders none of whose patterns occurred.
    pub unmatched: Vec<&'static str>,
}

impl Substitution {
    pub fn is_complete(&self) -> bool {
        self.unmatched.is_empty()
    }
}

/// Replace every placeholder pattern in `template`, in order.
pub fn substitute(template: &str, placeholders: &[Placeholder]) -> Substitution {
    let mut content = template.to_string();
    let mut unmatched = Vec::new();

    for placeholder in placeholders {
        let mut matched = false;
        for pattern in &placeholder.patterns {
            if pattern.is_empty() || !content.contains(pattern.as_str()) {
                continue;
            }
            content = content.replace(pattern.as_str(), &placeholder.replacement);
            matched = true;
        }
        if !matched {
            unmatched.push(placeholder.label);
        }
    }

    Substitution { content, unmatched }
}
