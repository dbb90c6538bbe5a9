use crate::models::Entry;
use crate::nlp::{LexiconTagger, PatternTag, Pos, Tagger};
use serde::Serialize;

use crate::nlp::PatternTag::{Adjective, Adverb, Gerund, Noun, Preposition, Verb};

/// Tried in order; every match from every pattern competes on length.
const PATTERNS: [&[PatternTag]; 8] = [
    &[Verb, Preposition, Noun],
    &[Verb, Noun, Preposition, Noun],
    &[Verb, Gerund, Noun],
    &[Verb, Adjective, Noun],
    &[Verb, Noun],
    &[Verb, Gerund],
    &[Verb, Adverb],
    &[Verb, Adjective],
];

/// Verbs too generic to stand for an entry on their own.
const UNINFORMATIVE_VERBS: [&str; 28] = [
    "is", "am", "are", "was", "were", "be", "been", "being", "the", "add", "added", "shared",
    "share", "have", "has", "had", "do", "did", "does", "get", "got", "make", "made", "go",
    "went", "say", "said", "let",
];

const BUBBLE_SCALE: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhraseBubble {
    pub phrase: String,
    /// Summed score.
    pub x: i64,
    /// Number of entries.
    pub y: usize,
    pub r: f64,
}

pub fn extract_phrase(text: &str) -> String {
    extract_phrase_with(&LexiconTagger, text)
}

pub fn extract_phrase_with<T: Tagger>(tagger: &T, text: &str) -> String {
    let tagged = tagger.tag(&text.to_lowercase());

    let mut longest: Option<String> = None;
    for pattern in PATTERNS {
        for found in tagged.match_pattern(pattern) {
            let better = longest
                .as_ref()
                .is_none_or(|current| found.chars().count() > current.chars().count());
            if better {
                longest = Some(found);
            }
        }
    }
    if let Some(phrase) = longest {
        return phrase;
    }

    let first_verb = tagged
        .tokens()
        .iter()
        .find(|token| matches!(token.pos, Pos::Verb(_)));
    if let Some(verb) = first_verb {
        if !UNINFORMATIVE_VERBS.contains(&verb.lemma.as_str()) {
            return verb.lemma.clone();
        }
    }

    text.to_string()
}

pub fn aggregate_phrases(entries: &[Entry]) -> Vec<PhraseBubble> {
    aggregate_phrases_with(&LexiconTagger, entries)
}

pub fn aggregate_phrases_with<T: Tagger>(tagger: &T, entries: &[Entry]) -> Vec<PhraseBubble> {
    let mut bubbles: Vec<PhraseBubble> = Vec::new();
    for entry in entries {
        let phrase = extract_phrase_with(tagger, &entry.name);
        match bubbles.iter_mut().find(|bubble| bubble.phrase == phrase) {
            Some(bubble) => {
                bubble.x = bubble.x.saturating_add(entry.score);
                bubble.y += 1;
            }
            None => bubbles.push(PhraseBubble {
                phrase,
                x: entry.score,
                y: 1,
                r: 0.0,
            }),
        }
    }
    for bubble in &mut bubbles {
        bubble.r = (bubble.y as f64).sqrt() * BUBBLE_SCALE;
    }
    bubbles.sort_by(|a, b| b.x.cmp(&a.x));
    bubbles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_pattern_match_wins() {
        assert_eq!(extract_phrase("Listened to music"), "listened to music");
        assert_eq!(extract_phrase("Cooked dinner for family"), "cooked dinner for family");
        assert_eq!(extract_phrase("Went running"), "went running");
    }

    #[test]
    fn falls_back_to_first_informative_verb() {
        assert_eq!(extract_phrase("Donated to a charity."), "donate");
        assert_eq!(extract_phrase("Exercised for 30 minutes."), "exercise");
    }

    #[test]
    fn blacklisted_verb_falls_back_to_full_text() {
        assert_eq!(extract_phrase("Went to the gym"), "Went to the gym");
    }

    #[test]
    fn never_empty_for_non_empty_input() {
        for text in ["asdkjasd", "!!!", "   ", "a", "Said 'no'", "30"] {
            assert!(!extract_phrase(text).is_empty(), "{text:?}");
        }
    }

    #[test]
    fn bubbles_tally_entries_and_scale_radius() {
        let mut repeated = Entry::new(2, "Donated to a charity.", "2026-01-06", 5);
        repeated.increment().unwrap();
        let entries = vec![
            Entry::new(1, "Donated to a charity.", "2026-01-05", 5),
            repeated,
            Entry::new(3, "Went running", "2026-01-06", 2),
            Entry::new(4, "Donated to a food bank.", "2026-01-07", 1),
            Entry::new(5, "Donated to a charity.", "2026-01-07", 3),
        ];
        let bubbles = aggregate_phrases(&entries);

        assert_eq!(bubbles[0].phrase, "donate");
        assert_eq!(bubbles[0].x, 5 + 10 + 1 + 3);
        assert_eq!(bubbles[0].y, 4);
        assert!((bubbles[0].r - 10.0).abs() < 1e-9);
        assert_eq!(bubbles[1].phrase, "went running");
        assert!((bubbles[1].r - 5.0).abs() < 1e-9);
    }
}
