use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::CategoryId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DescriptorError {
    #[error("number of questions must be between 1 and 19, got {raw:?}")]
    InvalidAmount { raw: String },

    #[error("no difficulty selected")]
    NoDifficultySelected,
}

/// Smallest number of questions a quiz may request.
pub const MIN_AMOUNT: u8 = 1;

/// Largest number of questions a quiz may request.
pub const MAX_AMOUNT: u8 = 19;

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Query-string value understood by the question source.
    #[must_use]
    pub fn as_str(self) -> &'static str {
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
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(DescriptorError::NoDifficultySelected),
        }
    }
}

//
// ─── DESCRIPTOR ────────────────────────────────────────────────────────────────
//

/// Validated parameters for one question request.
///
/// The question type is always multiple choice, so it is not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestDescriptor {
    category: Option<CategoryId>,
    amount: u8,
    difficulty: Difficulty,
}

impl RequestDescriptor {
    /// Build a descriptor from already-typed values.
    ///
    /// `category == None` requests questions from any category.
    ///
    /// # Errors
    ///
    /// Returns `DescriptorError::InvalidAmount` if `amount` is outside
    /// `MIN_AMOUNT..=MAX_AMOUNT`.
    pub fn new(
        category: Option<CategoryId>,
        amount: u8,
        difficulty: Difficulty,
    ) -> Result<Self, DescriptorError> {
        if !(MIN_AMOUNT..=MAX_AMOUNT).contains(&amount) {
            return Err(DescriptorError::InvalidAmount {
                raw: amount.to_string(),
            });
        }
        Ok(Self {
            category,
            amount,
            difficulty,
        })
    }

    #[must_use]
    pub fn category(&self) -> Option<CategoryId> {
        self.category
    }

    #[must_use]
    pub fn amount(&self) -> u8 {
        self.amount
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// Resolve raw setup-panel input into a `RequestDescriptor`.
///
/// The amount is checked first, so an invalid amount is reported even when no
/// difficulty was picked. The category is passed through as-is.
///
/// # Errors
///
/// Returns `DescriptorError::InvalidAmount` if `raw_amount` is not an integer
/// strictly between 0 and 20, and `DescriptorError::NoDifficultySelected` if
/// `raw_difficulty` is missing or names no known difficulty.
pub fn resolve(
    category: Option<CategoryId>,
    raw_amount: &str,
    raw_difficulty: Option<&str>,
) -> Result<RequestDescriptor, DescriptorError> {
    let amount = parse_amount(raw_amount)?;
    let difficulty = raw_difficulty
        .ok_or(DescriptorError::NoDifficultySelected)?
        .parse::<Difficulty>()?;
    RequestDescriptor::new(category, amount, difficulty)
}

fn parse_amount(raw: &str) -> Result<u8, DescriptorError> {
    let invalid = || DescriptorError::InvalidAmount {
        raw: raw.to_string(),
    };
    let amount = raw.trim().parse::<u8>().map_err(|_| invalid())?;
    if (MIN_AMOUNT..=MAX_AMOUNT).contains(&amount) {
        Ok(amount)
    } else {
        Err(invalid())
    }
}
