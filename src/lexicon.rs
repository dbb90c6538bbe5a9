//! Word lists backing the part-of-speech tagger.
//!
//! The lists are small and closed on purpose: entry names are short
//! imperative or past-tense phrases ("Went for a run", "Called mom"), so a
//! few hundred words cover nearly everything users type.

pub const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her", "our",
    "their", "its", "some", "every", "each", "all", "any", "no", "another", "other", "several",
    "few", "many", "much", "more", "most",
];

pub const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "someone",
    "something", "somebody", "anyone", "anything", "everyone", "everything", "nothing",
    "nobody", "myself", "yourself", "himself", "herself", "itself", "ourselves", "themselves",
    "mine", "yours", "ours", "theirs", "who", "what", "which",
];

pub const PREPOSITIONS: &[&str] = &[
    "to", "for", "with", "at", "in", "on", "of", "from", "by", "about", "into", "onto", "over",
    "under", "after", "before", "during", "through", "without", "around", "up", "out", "off",
    "across", "towards", "toward", "near", "between", "behind", "beside", "against", "along",
    "per", "via", "like",
];

pub const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "so", "because", "while", "when", "if", "than", "though", "although",
    "until", "unless", "whenever", "then",
];

pub const AUXILIARIES: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "done", "will", "would", "can", "could", "should", "shall", "may",
    "might", "must", "didn't", "don't", "doesn't", "won't", "can't", "wasn't", "weren't",
    "isn't", "aren't", "haven't", "hasn't", "wouldn't", "couldn't", "shouldn't", "i'm",
    "i've", "i'll", "i'd",
];

pub const ADVERBS: &[&str] = &[
    "not", "very", "really", "again", "today", "yesterday", "tonight", "also", "well",
    "always", "never", "finally", "quickly", "slowly", "together", "outside", "inside",
    "away", "back", "just", "still", "even", "too", "almost", "already", "soon",
    "often", "sometimes", "twice", "once", "hard", "late", "instead", "anyway", "there",
    "here", "now", "properly", "regularly", "daily", "nightly", "early",
];

pub const ADJECTIVES: &[&str] = &[
    "healthy", "new", "difficult", "good", "great", "kind", "nice", "long", "short", "big",
    "small", "old", "young", "local", "favorite", "favourite", "whole", "full", "free",
    "deep", "fresh", "quiet", "positive", "public", "extra", "first", "second", "third",
    "last", "next", "lovely", "friendly", "lonely", "happy", "sad", "calm", "busy", "tough",
    "easy", "hot", "cold", "warm", "clean", "tidy", "homemade", "entire", "proper", "early",
    "own", "best", "better", "real", "little", "huge", "quick", "brief", "slow",
    "weekly", "monthly", "mental", "physical", "personal", "social", "romantic", "honest",
    "patient", "polite", "grateful", "mindful", "elderly", "homeless", "financial",
];

/// Words that look like verbs or adverbs by suffix but are nouns.
pub const NOUNS: &[&str] = &[
    "family", "morning", "evening", "thing", "ceiling", "king", "ring", "wedding", "building",
    "meeting", "painting", "feeling", "speed", "seed", "hundred", "bed", "shed", "need",
    "anniversary", "ally", "belly", "bully", "jelly", "rally", "lily", "assembly", "fly",
    "reply", "supply", "news", "series", "species", "breakfast", "lunch", "dinner", "meal",
    "water", "time", "minute", "hour", "day", "week", "month", "year", "charity", "friend",
    "book", "chapter", "gym", "yoga", "therapy", "budget", "bill", "money", "task", "project",
    "colleague", "coworker", "work", "job", "office", "stairs", "kid", "child", "partner",
    "lover", "door", "boundary", "mistake", "problem", "service", "worker", "member",
    "community", "neighbor", "neighbour", "shelter", "home", "house", "room", "garden",
    "laundry", "dish", "class", "course", "lesson", "skill", "language", "chore", "party",
    "routine", "alarm", "nap", "saving", "savings", "spending", "clothing", "outing",
];

pub const VERBS: &[&str] = &[
    "add", "agree", "apologize", "apologise", "apply", "appreciate", "arrange", "ask", "avoid",
    "bake", "begin", "bike", "breathe", "bring", "budget", "build", "buy", "call", "care",
    "catch", "celebrate", "chat", "check", "cheer", "choose", "clean", "climb", "comfort",
    "come", "compliment", "complete", "cook", "create", "cut", "cycle", "dance", "declutter",
    "display", "donate", "draw", "drink", "drive", "dust", "eat", "email", "encourage",
    "enjoy", "exercise", "explore", "feed", "feel", "fight", "find", "finish", "fix", "fly",
    "fold", "forgive", "forget", "garden", "get", "give", "go", "grab", "greet", "grow",
    "hang", "hear", "help", "hike", "hold", "hope", "host", "hug", "invest", "invite",
    "iron", "jog", "journal", "keep", "kiss", "know", "laugh", "lead", "learn", "leave",
    "lend", "let", "lift", "limit", "listen", "look", "lose", "love", "make", "manage",
    "meditate", "meet", "mentor", "mop", "move", "nap", "need", "offer", "open", "organize",
    "organise", "paint", "pay", "pick", "plan", "plant", "play", "practice", "practise",
    "pray", "prepare", "put", "quit", "reach", "read", "recycle", "reduce", "relax", "rely",
    "remember", "repair", "reply", "rest", "ride", "run", "save", "say", "see", "send", "set",
    "share", "show", "sing", "sit", "skip", "sleep", "smile", "speak", "spend", "stand",
    "start", "stay", "stop", "stretch", "study", "support", "surprise", "sweep", "swim",
    "take", "talk", "teach", "tell", "text", "thank", "think", "throw", "tidy", "train",
    "treat", "try", "understand", "use", "vacuum", "visit", "volunteer", "wake", "walk",
    "want", "wash", "watch", "water", "win", "work", "write",
];

/// Irregular past tenses and participles mapped to their infinitive.
pub const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("went", "go"), ("gone", "go"), ("ate", "eat"), ("eaten", "eat"), ("ran", "run"),
    ("wrote", "write"), ("written", "write"), ("made", "make"), ("gave", "give"),
    ("given", "give"), ("took", "take"), ("taken", "take"), ("saw", "see"), ("seen", "see"),
    ("met", "meet"), ("bought", "buy"), ("brought", "bring"), ("got", "get"),
    ("gotten", "get"), ("spoke", "speak"), ("spoken", "speak"), ("told", "tell"),
    ("felt", "feel"), ("left", "leave"), ("slept", "sleep"), ("drank", "drink"),
    ("drunk", "drink"), ("drove", "drive"), ("driven", "drive"), ("swam", "swim"),
    ("swum", "swim"), ("sang", "sing"), ("sung", "sing"), ("began", "begin"),
    ("begun", "begin"), ("came", "come"), ("kept", "keep"), ("taught", "teach"),
    ("thought", "think"), ("found", "find"), ("paid", "pay"), ("sent", "send"),
    ("spent", "spend"), ("built", "build"), ("said", "say"), ("forgave", "forgive"),
    ("forgiven", "forgive"), ("held", "hold"), ("heard", "hear"), ("sat", "sit"),
    ("stood", "stand"), ("won", "win"), ("woke", "wake"), ("woken", "wake"),
    ("fought", "fight"), ("caught", "catch"), ("fed", "feed"), ("led", "lead"),
    ("lost", "lose"), ("rode", "ride"), ("ridden", "ride"), ("threw", "throw"),
    ("thrown", "throw"), ("forgot", "forget"), ("forgotten", "forget"),
    ("understood", "understand"), ("knew", "know"), ("known", "know"), ("grew", "grow"),
    ("grown", "grow"), ("drew", "draw"), ("drawn", "draw"), ("flew", "fly"),
    ("hung", "hang"), ("lent", "lend"), ("shook", "shake"), ("chose", "choose"),
    ("chosen", "choose"), ("shown", "show"),
];

pub const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("children", "child"), ("people", "person"), ("men", "man"), ("women", "woman"),
    ("feet", "foot"), ("teeth", "tooth"), ("mice", "mouse"), ("lives", "life"),
    ("knives", "knife"), ("wives", "wife"), ("leaves", "leaf"), ("shelves", "shelf"),
    ("selves", "self"), ("halves", "half"), ("geese", "goose"),
];

/// Nouns whose trailing `s` is not a plural marker.
pub const INVARIANT_NOUNS: &[&str] = &[
    "news", "series", "species", "physics", "mathematics", "lens", "stairs", "savings",
    "clothes", "thanks", "pilates", "yes",
];

pub fn contains(list: &[&str], word: &str) -> bool {
    list.contains(&word)
}

pub fn lookup<'a>(table: &'a [(&str, &str)], word: &str) -> Option<&'a str> {
    table
        .iter()
        .find(|(form, _)| *form == word)
        .map(|(_, base)| *base)
}
