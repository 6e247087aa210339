use std::fmt;
use std::str::FromStr;

use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParamsError {
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

//
// ─── DIFFICULTY ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Value sent to the question source.
    #[must_use]
    pub fn as_query_value(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

impl FromStr for Difficulty {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_query_value().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParamsError::UnknownDifficulty(s.to_string()))
    }
}

//
// ─── CATEGORY ─────────────────────────────────────────────────────────────────
//

/// Topic tag understood by the question source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Javascript,
    Html,
    Bash,
    Php,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Javascript,
        Category::Html,
        Category::Bash,
        Category::Php,
    ];

    /// Tag value sent to the question source. Casing matters upstream.
    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            Category::Javascript => "Javascript",
            Category::Html => "HTML",
            Category::Bash => "BASH",
            Category::Php => "PHP",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Javascript => "Javascript",
            Category::Html => "HTML",
            Category::Bash => "Bash",
            Category::Php => "PHP",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for Category {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParamsError::UnknownCategory(s.to_string()))
    }
}

//
// ─── REQUEST ──────────────────────────────────────────────────────────────────
//

/// Filters for a parameterized quiz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizParams {
    pub difficulty: Difficulty,
    pub category: Option<Category>,
}

impl QuizParams {
    #[must_use]
    pub fn new(difficulty: Difficulty, category: Option<Category>) -> Self {
        Self {
            difficulty,
            category,
        }
    }
}

/// What to ask the question source for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizRequest {
    /// Any questions, no filters.
    Random,
    Filtered(QuizParams),
}

impl QuizRequest {
    #[must_use]
    pub fn params(&self) -> Option<&QuizParams> {
        match self {
            QuizRequest::Random => None,
            QuizRequest::Filtered(params) => Some(params),
        }
    }
}
