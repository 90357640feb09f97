//! Clause slots: keyworded text fragments with an explicit absent state.

use crate::fragment::Fragment;

/// Space-padded separator for comma-joined list slots.
pub const COMMA: &str = " , ";

/// Space-padded separator for AND-joined predicate lists.
pub const AND: &str = " AND ";

/// One clause of a query: a keyword, a join separator, and the current text.
///
/// An empty value means the clause is absent and renders to nothing. Slots
/// do not know about each other; ordering is the owning query's concern.
#[derive(Clone, Debug)]
pub struct Clause {
    keyword: &'static str,
    separator: &'static str,
    value: String,
}

impl Clause {
    /// Create an unset clause with the given keyword and separator.
    ///
    /// An empty keyword makes a bare slot that renders its value alone.
    pub const fn new(keyword: &'static str, separator: &'static str) -> Self {
        Self {
            keyword,
            separator,
            value: String::new(),
        }
    }

    /// Replace the clause value.
    ///
    /// Single text is normalized and stored; a list is filtered of empty
    /// elements, joined with the separator, then normalized. Empty input
    /// leaves the clause absent.
    pub fn set(&mut self, value: impl Into<Fragment>) {
        self.value = match value.into() {
            Fragment::Text(text) => normalize(&text),
            Fragment::List(items) => {
                let kept: Vec<String> = items.into_iter().filter(|item| !item.is_empty()).collect();
                normalize(&kept.join(self.separator))
            }
        };
    }

    /// Append text behind a connective, or start the clause when unset.
    pub fn append(&mut self, connective: &str, text: &str) {
        if self.value.is_empty() {
            self.value = normalize(text);
        } else {
            let joined = format!("{}{}{}", self.value, connective, text);
            self.value = normalize(&joined);
        }
    }

    /// True if the clause holds a value.
    pub fn is_set(&self) -> bool {
        !self.value.is_empty()
    }

    /// The stored text, empty when the clause is absent.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Render as `keyword value`, the bare value when the keyword is empty,
    /// or `""` when the clause is absent.
    pub fn render(&self) -> String {
        if self.value.is_empty() {
            String::new()
        } else if self.keyword.is_empty() {
            self.value.clone()
        } else {
            format!("{} {}", self.keyword, self.value)
        }
    }
}

/// Normalize clause text: fix `" , "` join artifacts to `", "`, then
/// collapse runs of spaces, repeating until stable so a collapse never
/// re-exposes a comma artifact.
pub(crate) fn normalize(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        // Every changed pass strictly shortens the text.
        let pass = collapse_spaces(&current.replace(" , ", ", "));
        if pass == current {
            return current;
        }
        current = pass;
    }
}

fn collapse_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_was_space = false;
    for ch in text.chars() {
        if ch == ' ' {
            if !previous_was_space {
                out.push(' ');
            }
            previous_was_space = true;
        } else {
            out.push(ch);
            previous_was_space = false;
        }
    }
    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(text in "[a-z ,]*") {
            let once = normalize(&text);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn prop_normalized_text_has_no_artifacts(text in "[a-z ,:=0-9]*") {
            let normalized = normalize(&text);
            prop_assert!(!normalized.contains("  "));
            prop_assert!(!normalized.contains(" , "));
        }

        #[test]
        fn prop_set_then_render_prefixes_keyword(value in "[a-z0-9 ,:=]+") {
            let mut clause = Clause::new("WHERE", AND);
            clause.set(value.as_str());
            if clause.is_set() {
                let expected = format!("WHERE {}", clause.value());
                prop_assert_eq!(clause.render(), expected);
            } else {
                prop_assert_eq!(clause.render(), "");
            }
        }
    }
}
