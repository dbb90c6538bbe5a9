//! Lightweight English tokenizer and part-of-speech tagger.
//!
//! The classifier and the phrase extractor only need three token views
//! (raw terms, singular nouns, infinitive verbs) and ordered tag-pattern
//! matching, so the tagger is a lexicon lookup plus suffix rules with a
//! single context rule. Anything fancier can be plugged in through
//! [`Tagger`].

use crate::lexicon::{self, contains, lookup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbForm {
    Base,
    Past,
    Gerund,
    ThirdPerson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pos {
    Noun,
    Pronoun,
    Verb(VerbForm),
    Auxiliary,
    Adjective,
    Adverb,
    Preposition,
    Determiner,
    Conjunction,
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub pos: Pos,
    /// Infinitive for verbs, singular for nouns, the text itself otherwise.
    pub lemma: String,
}

/// Tags usable in a match pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternTag {
    Verb,
    Noun,
    Preposition,
    Gerund,
    Adjective,
    Adverb,
}

impl PatternTag {
    fn accepts(self, pos: Pos) -> bool {
        match self {
            PatternTag::Verb => matches!(pos, Pos::Verb(_)),
            PatternTag::Gerund => pos == Pos::Verb(VerbForm::Gerund),
            PatternTag::Noun => matches!(pos, Pos::Noun | Pos::Pronoun),
            PatternTag::Preposition => pos == Pos::Preposition,
            PatternTag::Adjective => pos == Pos::Adjective,
            PatternTag::Adverb => pos == Pos::Adverb,
        }
    }
}

pub trait Tagger {
    fn tag(&self, text: &str) -> TaggedText;
}

#[derive(Debug, Clone, Default)]
pub struct TaggedText {
    tokens: Vec<Token>,
}

impl TaggedText {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn terms(&self) -> Vec<String> {
        self.tokens.iter().map(|token| token.text.clone()).collect()
    }

    pub fn singular_nouns(&self) -> Vec<String> {
        self.tokens
            .iter()
            .filter(|token| token.pos == Pos::Noun)
            .map(|token| token.lemma.clone())
            .collect()
    }

    pub fn infinitive_verbs(&self) -> Vec<String> {
        self.tokens
            .iter()
            .filter(|token| matches!(token.pos, Pos::Verb(_)))
            .map(|token| token.lemma.clone())
            .collect()
    }

    /// Every left-to-right, non-overlapping run of adjacent tokens matching
    /// `pattern`, as space-joined text.
    pub fn match_pattern(&self, pattern: &[PatternTag]) -> Vec<String> {
        let mut found = Vec::new();
        if pattern.is_empty() {
            return found;
        }

        let mut start = 0;
        while start + pattern.len() <= self.tokens.len() {
            let window = &self.tokens[start..start + pattern.len()];
            let hit = window
                .iter()
                .zip(pattern)
                .all(|(token, tag)| tag.accepts(token.pos));
            if hit {
                let words: Vec<&str> = window.iter().map(|token| token.text.as_str()).collect();
                found.push(words.join(" "));
                start += pattern.len();
            } else {
                start += 1;
            }
        }
        found
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconTagger;

impl Tagger for LexiconTagger {
    fn tag(&self, text: &str) -> TaggedText {
        let mut tokens: Vec<Token> = Vec::new();
        for word in split_words(text) {
            let prev = tokens.last().map(|token| token.pos);
            let pos = tag_word(&word, prev);
            let lemma = match pos {
                Pos::Verb(form) => to_infinitive(&word, form),
                Pos::Noun => singularize(&word),
                _ => word.clone(),
            };
            tokens.push(Token {
                text: word,
                pos,
                lemma,
            });
        }
        TaggedText::new(tokens)
    }
}

/// Lowercased runs of letters, digits, apostrophes and hyphens, with
/// apostrophes and hyphens trimmed from both ends.
pub fn split_words(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '-'))
        .map(|raw| raw.trim_matches(|c| c == '\'' || c == '-'))
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn tag_word(word: &str, prev: Option<Pos>) -> Pos {
    if word.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return Pos::Value;
    }
    if contains(lexicon::DETERMINERS, word) {
        return Pos::Determiner;
    }
    if contains(lexicon::PRONOUNS, word) {
        return Pos::Pronoun;
    }
    if contains(lexicon::PREPOSITIONS, word) {
        return Pos::Preposition;
    }
    if contains(lexicon::CONJUNCTIONS, word) {
        return Pos::Conjunction;
    }
    if contains(lexicon::AUXILIARIES, word) {
        return Pos::Auxiliary;
    }
    if contains(lexicon::ADVERBS, word) {
        return Pos::Adverb;
    }

    // "Clean the kitchen" vs "a clean kitchen", "Work on it" vs "at work".
    let clause_start = matches!(prev, None | Some(Pos::Pronoun) | Some(Pos::Conjunction));
    let verb_here = clause_start && contains(lexicon::VERBS, word);
    if contains(lexicon::ADJECTIVES, word) && !verb_here {
        return Pos::Adjective;
    }
    if contains(lexicon::NOUNS, word) && !verb_here {
        return Pos::Noun;
    }
    if matches!(prev, Some(Pos::Determiner) | Some(Pos::Adjective)) {
        return Pos::Noun;
    }

    if lookup(lexicon::IRREGULAR_VERBS, word).is_some() {
        return Pos::Verb(VerbForm::Past);
    }
    if contains(lexicon::VERBS, word) {
        return Pos::Verb(VerbForm::Base);
    }

    let len = word.chars().count();
    if len > 4 && word.ends_with("ing") {
        return Pos::Verb(VerbForm::Gerund);
    }
    if len > 3 && word.ends_with("ed") {
        return Pos::Verb(VerbForm::Past);
    }
    if len > 3 && word.ends_with("ly") {
        return Pos::Adverb;
    }
    const ADJECTIVE_SUFFIXES: [&str; 6] = ["ful", "ous", "able", "ible", "less", "ical"];
    if len > 5 && ADJECTIVE_SUFFIXES.iter().any(|suffix| word.ends_with(suffix)) {
        return Pos::Adjective;
    }
    if word.ends_with('s') && contains(lexicon::VERBS, &third_person_stem(word)) {
        return Pos::Verb(VerbForm::ThirdPerson);
    }

    Pos::Noun
}

pub fn to_infinitive(word: &str, form: VerbForm) -> String {
    if let Some(base) = lookup(lexicon::IRREGULAR_VERBS, word) {
        return base.to_string();
    }
    match form {
        VerbForm::Base => word.to_string(),
        VerbForm::Past => strip_inflection(word, "ed"),
        VerbForm::Gerund => strip_inflection(word, "ing"),
        VerbForm::ThirdPerson => third_person_stem(word),
    }
}

fn strip_inflection(word: &str, suffix: &str) -> String {
    let Some(stem) = word.strip_suffix(suffix) else {
        return word.to_string();
    };
    if stem.is_empty() {
        return word.to_string();
    }

    // "tried" -> "try", "studied" -> "study"
    if suffix == "ed" {
        if let Some(head) = stem.strip_suffix('i') {
            if !head.is_empty() {
                return format!("{head}y");
            }
        }
    }

    let with_e = format!("{stem}e");
    let undoubled = undouble(stem);
    let candidates = [stem.to_string(), undoubled.clone(), with_e.clone()];
    if let Some(known) = candidates
        .iter()
        .find(|candidate| contains(lexicon::VERBS, candidate))
    {
        return known.clone();
    }

    if undoubled != stem && !stem.ends_with(['l', 's', 'z', 'f']) {
        undoubled
    } else if needs_silent_e(stem) {
        with_e
    } else {
        stem.to_string()
    }
}

fn undouble(stem: &str) -> String {
    let mut chars = stem.chars().rev();
    match (chars.next(), chars.next()) {
        (Some(last), Some(before)) if last == before && !is_vowel(last) => {
            stem[..stem.len() - last.len_utf8()].to_string()
        }
        _ => stem.to_string(),
    }
}

fn needs_silent_e(stem: &str) -> bool {
    const ENDINGS: [&str; 30] = [
        "at", "iz", "is", "ys", "ac", "ec", "ic", "nc", "rc", "uc", "ov", "iv", "av", "ev",
        "rv", "lv", "dg", "rg", "ag", "bl", "cl", "dl", "fl", "gl", "kl", "pl", "tl", "zl",
        "ut", "ur",
    ];
    ENDINGS.iter().any(|ending| stem.ends_with(ending))
}

fn third_person_stem(word: &str) -> String {
    if let Some(head) = word.strip_suffix("ies") {
        if !head.is_empty() {
            return format!("{head}y");
        }
    }
    const ES_ENDINGS: [&str; 6] = ["ches", "shes", "sses", "xes", "zes", "oes"];
    if ES_ENDINGS.iter().any(|ending| word.ends_with(ending)) {
        return word[..word.len() - 2].to_string();
    }
    word.strip_suffix('s').unwrap_or(word).to_string()
}

pub fn singularize(word: &str) -> String {
    if let Some(single) = lookup(lexicon::IRREGULAR_NOUNS, word) {
        return single.to_string();
    }
    if word.chars().count() <= 3 || contains(lexicon::INVARIANT_NOUNS, word) {
        return word.to_string();
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    if let Some(head) = word.strip_suffix("ies") {
        if head.chars().count() > 1 {
            return format!("{head}y");
        }
    }
    const ES_ENDINGS: [&str; 5] = ["sses", "ches", "shes", "xes", "zes"];
    if ES_ENDINGS.iter().any(|ending| word.ends_with(ending)) {
        return word[..word.len() - 2].to_string();
    }
    word.strip_suffix('s').unwrap_or(word).to_string()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}
