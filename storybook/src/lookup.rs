//! Word lookup: token normalization and vocabulary resolution.

use crate::content::{Content, DialogueLine, VocabularyEntry};

/// Lowercase and strip the literal characters `! . , ?`.
///
/// No other trimming — token boundaries come from splitting dialogue text
/// on spaces.
pub fn normalize_token(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '!' | '.' | ',' | '?'))
        .collect()
}

impl Content {
    /// Resolve a tapped token against the vocabulary. A miss is not an
    /// error; the caller simply shows no popup.
    pub fn resolve(&self, raw_token: &str) -> Option<&VocabularyEntry> {
        let key = normalize_token(raw_token);
        let entry = self.vocabulary().get(&key);
        if entry.is_none() {
            tracing::debug!(token = raw_token, "no vocabulary entry for token");
        }
        entry
    }
}

impl DialogueLine {
    /// Whether a token of this line's text is marked tappable.
    pub fn is_highlighted(&self, token: &str) -> bool {
        let clean = normalize_token(token);
        self.highlighted_words
            .iter()
            .any(|word| word.to_lowercase() == clean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_punctuation_is_stripped() {
        let content = Content::load();
        for token in ["shoes!", "shoes.", "shoes,", "shoes?", "shoes"] {
            assert_eq!(
                content.resolve(token),
                content.resolve("shoes"),
                "resolve({token:?}) differed from the bare token"
            );
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let content = Content::load();
        let entry = content.resolve("Shoes!").expect("shoes should resolve");
        assert_eq!(entry.translation, "鞋子");
        assert_eq!(content.resolve("SHOES"), Some(entry));
    }

    #[test]
    fn unknown_tokens_resolve_to_none() {
        let content = Content::load();
        assert_eq!(content.resolve("teddy"), None);
        assert_eq!(content.resolve(""), None);
    }

    #[test]
    fn interior_punctuation_is_stripped_too() {
        assert_eq!(normalize_token("don't"), "don't");
        assert_eq!(normalize_token("It's,!"), "it's");
    }

    #[test]
    fn highlight_check_matches_case_insensitively() {
        let content = Content::load();
        // Panel 4 highlights "Look" with a capital L in the source data.
        let line = &content.panels[3].dialogues[0];
        assert!(line.is_highlighted("Look!"));
        assert!(line.is_highlighted("look"));
        assert!(!line.is_highlighted("too"));
    }
}
