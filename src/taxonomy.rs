//! The fixed set of life areas entries are sorted into.

#[derive(Debug, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub color: &'static str,
    /// Single words are matched against terms; anything with a space is
    /// matched as a substring of the normalized text.
    pub keywords: &'static [&'static str],
}

pub const MISCELLANEOUS: &str = "Miscellaneous";

/// Declaration order is significant: score ties go to the earlier entry.
pub static CATEGORIES: [Category; 14] = [
    Category {
        name: "Physical Health",
        color: "#e74c3c",
        keywords: &[
            "exercise", "workout", "gym", "run", "jog", "walk", "hike", "swim", "yoga",
            "stretch", "bike", "cycle", "sport", "lift", "train", "fitness", "pilates", "dance",
            "marathon", "push-up", "went for a run", "went for a walk", "took the stairs",
        ],
    },
    Category {
        name: "Nutrition",
        color: "#27ae60",
        keywords: &[
            "eat", "meal", "healthy", "vegetable", "fruit", "salad", "breakfast", "lunch",
            "dinner", "cook", "diet", "nutrition", "water", "snack", "protein", "vitamin",
            "homemade", "healthy meal", "drink water", "drank water",
        ],
    },
    Category {
        name: "Mental Health",
        color: "#9b59b6",
        keywords: &[
            "meditate", "meditation", "journal", "therapy", "therapist", "mindful",
            "mindfulness", "breathe", "relax", "calm", "gratitude", "grateful", "affirmation",
            "mental", "anxiety", "stress", "self-care", "took a break", "deep breath",
        ],
    },
    Category {
        name: "Sleep & Routine",
        color: "#34495e",
        keywords: &[
            "sleep", "nap", "bed", "wake", "alarm", "routine", "rest", "bedtime", "schedule",
            "early", "on time", "woke up", "went to bed", "screen time",
        ],
    },
    Category {
        name: "Romance",
        color: "#e84393",
        keywords: &[
            "lover", "partner", "romantic", "date", "kiss", "spouse", "wife", "husband",
            "boyfriend", "girlfriend", "affection", "anniversary", "valentine", "flower",
        ],
    },
    Category {
        name: "Family",
        color: "#e67e22",
        keywords: &[
            "family", "mom", "mother", "dad", "father", "parent", "sister", "brother",
            "sibling", "grandma", "grandpa", "grandmother", "grandfather", "kid", "child",
            "son", "daughter", "cousin", "uncle", "nephew", "niece", "relative",
            "family member",
        ],
    },
    Category {
        name: "Friendship",
        color: "#f1c40f",
        keywords: &[
            "friend", "friendship", "hang", "hangout", "party", "social", "chat", "hug",
            "buddy", "reunion", "catch up", "game night", "spent time with",
        ],
    },
    Category {
        name: "Community Service",
        color: "#16a085",
        keywords: &[
            "donate", "donation", "charity", "volunteer", "community", "neighbor",
            "neighbour", "fundraiser", "shelter", "nonprofit", "litter", "homeless",
            "food bank", "blood drive", "gave back",
        ],
    },
    Category {
        name: "Career & Work",
        color: "#2980b9",
        keywords: &[
            "work", "job", "task", "project", "colleague", "coworker", "meeting", "office",
            "deadline", "boss", "client", "career", "presentation", "email", "report",
            "promotion", "interview", "resume", "manager", "team",
        ],
    },
    Category {
        name: "Learning & Growth",
        color: "#8e44ad",
        keywords: &[
            "learn", "read", "book", "chapter", "study", "course", "class", "lesson", "skill",
            "practice", "research", "language", "lecture", "podcast", "article", "tutorial",
            "knowledge", "something new", "new skill",
        ],
    },
    Category {
        name: "Home & Chores",
        color: "#d35400",
        keywords: &[
            "clean", "tidy", "laundry", "dish", "vacuum", "organize", "declutter", "home",
            "house", "room", "garden", "chore", "repair", "fix", "mop", "sweep", "grocery",
        ],
    },
    Category {
        name: "Finance",
        color: "#f39c12",
        keywords: &[
            "save", "saving", "budget", "money", "bill", "pay", "invest", "investment",
            "expense", "bank", "debt", "loan", "spending", "retirement", "finance", "paid off",
        ],
    },
    Category {
        name: "Kindness & Character",
        color: "#1abc9c",
        keywords: &[
            "thank", "thanks", "kind", "kindness", "compliment", "smile", "door", "forgive",
            "apologize", "apology", "boundary", "patience", "patient", "polite", "listen",
            "honest", "stranger", "thank you", "held the door", "said 'no'", "said no",
            "service worker", "without judgment",
        ],
    },
    Category {
        name: MISCELLANEOUS,
        color: "#95a5a6",
        keywords: &[],
    },
];

pub fn miscellaneous() -> &'static Category {
    &CATEGORIES[CATEGORIES.len() - 1]
}

pub fn find(name: &str) -> Option<&'static Category> {
    CATEGORIES
        .iter()
        .find(|category| category.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miscellaneous_is_last_and_has_no_keywords() {
        assert_eq!(miscellaneous().name, MISCELLANEOUS);
        assert!(miscellaneous().keywords.is_empty());
        assert_eq!(CATEGORIES.len(), 14);
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("physical health").map(|c| c.name), Some("Physical Health"));
        assert!(find("Underwater Basket Weaving").is_none());
    }

    #[test]
    fn keywords_are_lowercase() {
        for category in &CATEGORIES {
            for keyword in category.keywords {
                assert_eq!(*keyword, keyword.to_lowercase(), "{}", category.name);
            }
        }
    }
}
