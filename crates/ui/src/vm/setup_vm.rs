use dioxus::prelude::*;

use trivia_core::model::{CategoryId, Difficulty};

pub const DEFAULT_AMOUNT: &str = "10";

/// Setup panel inputs, kept raw until the start service validates them.
#[derive(Clone, Copy, PartialEq)]
pub struct SetupForm {
    /// `None` means any category.
    pub category: Signal<Option<u32>>,
    pub amount: Signal<String>,
    pub difficulty: Signal<Option<Difficulty>>,
}

pub fn use_setup_form() -> SetupForm {
    SetupForm {
        category: use_signal(|| None),
        amount: use_signal(|| DEFAULT_AMOUNT.to_string()),
        difficulty: use_signal(|| None),
    }
}

/// Snapshot of the form taken when Start is pressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupInput {
    pub category: Option<CategoryId>,
    pub amount: String,
    pub difficulty: Option<Difficulty>,
}

impl SetupInput {
    #[must_use]
    pub fn raw_difficulty(&self) -> Option<&'static str> {
        self.difficulty.map(Difficulty::as_str)
    }
}

impl SetupForm {
    #[must_use]
    pub fn snapshot(&self) -> SetupInput {
        SetupInput {
            category: (*self.category.peek()).map(CategoryId::new),
            amount: (*self.amount.peek()).clone(),
            difficulty: *self.difficulty.peek(),
        }
    }
}

/// Parse a `<select>` value; the empty "Any category" option maps to `None`.
#[must_use]
pub fn parse_category_choice(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}
