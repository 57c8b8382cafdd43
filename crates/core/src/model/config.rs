use std::fmt;

//
// ─── SETUP CATALOGS ────────────────────────────────────────────────────────────
//

/// Name used when the player submits a blank name.
pub const DEFAULT_PLAYER_NAME: &str = "Anonymous";

/// Question counts offered during setup.
pub const QUESTION_AMOUNTS: [u8; 4] = [3, 5, 7, 10];

/// One selectable entry in a source's category catalog.
///
/// `filter` is the token the source sends in its query; the "mix of all
/// categories" entry has no token and leaves the query unfiltered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    label: &'static str,
    filter: Option<&'static str>,
}

impl Category {
    #[must_use]
    pub const fn new(label: &'static str, filter: &'static str) -> Self {
        Self {
            label,
            filter: Some(filter),
        }
    }

    /// The "any category" entry.
    #[must_use]
    pub const fn mix(label: &'static str) -> Self {
        Self {
            label,
            filter: None,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    #[must_use]
    pub fn filter(&self) -> Option<&'static str> {
        self.filter
    }
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Prompt order.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Lowercase token expected by the trivia APIs.
    #[must_use]
    pub fn filter(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── QUESTION KIND ─────────────────────────────────────────────────────────────
//

/// Which question formats the player wants to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
    #[default]
    Any,
}

impl QuestionKind {
    /// Prompt order.
    pub const ALL: [Self; 3] = [Self::MultipleChoice, Self::TrueFalse, Self::Any];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MultipleChoice => "Multiple Choices",
            Self::TrueFalse => "True/False",
            Self::Any => "Both",
        }
    }

    /// Query token; `None` means the type filter is omitted.
    #[must_use]
    pub fn filter(self) -> Option<&'static str> {
        match self {
            Self::MultipleChoice => Some("multiple"),
            Self::TrueFalse => Some("boolean"),
            Self::Any => None,
        }
    }
}

//
// ─── SESSION CONFIG ────────────────────────────────────────────────────────────
//

/// Everything the player chose during setup.
///
/// Built once by the setup prompts and read-only afterwards; the question
/// source and the play loop only ever borrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    player_name: String,
    category: Option<String>,
    difficulty: Option<Difficulty>,
    amount: u8,
    kind: QuestionKind,
}

impl SessionConfig {
    /// Build a config from the setup answers.
    ///
    /// A blank `player_name` is replaced with [`DEFAULT_PLAYER_NAME`], so the
    /// name is never empty. `category` holds the source-specific filter token,
    /// `None` meaning "any category".
    #[must_use]
    pub fn new(
        player_name: impl Into<String>,
        category: Option<String>,
        difficulty: Option<Difficulty>,
        amount: u8,
        kind: QuestionKind,
    ) -> Self {
        let player_name = player_name.into();
        let trimmed = player_name.trim();
        let player_name = if trimmed.is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            trimmed.to_string()
        };

        Self {
            player_name,
            category,
            difficulty,
            amount,
            kind,
        }
    }

    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    #[must_use]
    pub fn amount(&self) -> u8 {
        self.amount
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
