//! Category label wrapping for chart axes.

use serde::{Deserialize, Serialize};

/// Maximum characters per axis label line.
pub const LABEL_MAX_LEN: usize = 16;

/// A category label, either kept on one line or split into several.
///
/// Serializes untagged: a plain string or an array of strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WrappedLabel {
    /// Short enough to render as-is.
    Single(String),
    /// Greedily packed lines, top to bottom.
    Lines(Vec<String>),
}

impl WrappedLabel {
    /// Lines to draw on the axis.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            WrappedLabel::Single(label) => vec![label.as_str()],
            WrappedLabel::Lines(lines) => lines.iter().map(String::as_str).collect(),
        }
    }

    /// Lines rejoined with single spaces (tooltip titles).
    pub fn joined(&self) -> String {
        match self {
            WrappedLabel::Single(label) => label.clone(),
            WrappedLabel::Lines(lines) => lines.join(" "),
        }
    }

    /// Number of rendered lines.
    pub fn line_count(&self) -> usize {
        match self {
            WrappedLabel::Single(_) => 1,
            WrappedLabel::Lines(lines) => lines.len(),
        }
    }
}

impl From<&str> for WrappedLabel {
    fn from(label: &str) -> Self {
        wrap_label(label, LABEL_MAX_LEN)
    }
}

/// Pack the words of `label` into lines of at most `max_len` characters.
///
/// A line breaks only when appending the next word would overflow it and the
/// line already holds something. Words are never split, so a single word
/// longer than `max_len` gets a line of its own.
///
/// ```rust
/// use pitch_deck::charts::{wrap_label, WrappedLabel};
///
/// assert_eq!(wrap_label("TAM", 16), WrappedLabel::Single("TAM".into()));
/// assert_eq!(
///     wrap_label("Direct Costs to Private Insurers", 16),
///     WrappedLabel::Lines(vec!["Direct Costs to".into(), "Private Insurers".into()])
/// );
/// ```
pub fn wrap_label(label: &str, max_len: usize) -> WrappedLabel {
    if label.chars().count() <= max_len {
        return WrappedLabel::Single(label.to_owned());
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in label.split(' ') {
        let candidate_len = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if candidate_len > max_len && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    WrappedLabel::Lines(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines_of(label: WrappedLabel) -> Vec<String> {
        match label {
            WrappedLabel::Lines(lines) => lines,
            WrappedLabel::Single(s) => panic!("expected wrapped lines, got single {s:?}"),
        }
    }

    #[test]
    fn short_labels_are_returned_unchanged() {
        for label in ["TAM", "SAM", "SOM", "", "exactly 16 chars"] {
            assert_eq!(wrap_label(label, LABEL_MAX_LEN), WrappedLabel::Single(label.into()));
        }
    }

    #[test]
    fn direct_costs_label_wraps_and_rejoins() {
        let original = "Direct Costs to Private Insurers";
        let wrapped = wrap_label(original, LABEL_MAX_LEN);

        assert_eq!(wrapped.joined(), original);
        let lines = lines_of(wrapped);
        assert_eq!(lines, vec!["Direct Costs to", "Private Insurers"]);
        assert!(lines.iter().all(|l| l.chars().count() <= LABEL_MAX_LEN));
    }

    #[test]
    fn indirect_costs_label() {
        let original = "Indirect Costs to Employers (Lost Productivity)";
        let lines = lines_of(wrap_label(original, LABEL_MAX_LEN));

        assert_eq!(
            lines,
            vec!["Indirect Costs", "to Employers", "(Lost", "Productivity)"]
        );
        assert_eq!(lines.join(" "), original);
    }

    #[test]
    fn long_word_is_not_split() {
        let lines = lines_of(wrap_label("a supercalifragilistic word", 10));
        assert_eq!(lines, vec!["a", "supercalifragilistic", "word"]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 16 characters, 17+ bytes
        let label = "café café café c";
        assert_eq!(label.chars().count(), 16);
        assert_eq!(wrap_label(label, 16), WrappedLabel::Single(label.into()));
    }

    #[test]
    fn serializes_untagged() {
        let single = serde_json::to_string(&WrappedLabel::Single("TAM".into())).unwrap();
        assert_eq!(single, "\"TAM\"");

        let lines = serde_json::to_string(&wrap_label("Direct Costs to Private Insurers", 16))
            .unwrap();
        assert_eq!(lines, r#"["Direct Costs to","Private Insurers"]"#);
    }

    #[test]
    fn line_helpers() {
        let wrapped = wrap_label("Direct Costs to Private Insurers", 16);
        assert_eq!(wrapped.line_count(), 2);
        assert_eq!(wrapped.lines(), vec!["Direct Costs to", "Private Insurers"]);
        assert_eq!(WrappedLabel::from("SOM").lines(), vec!["SOM"]);
    }
}
