use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of excuse categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tech,
    Pet,
    Health,
    Absurd,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Tech,
        Category::Pet,
        Category::Health,
        Category::Absurd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tech => "tech",
            Category::Pet => "pet",
            Category::Health => "health",
            Category::Absurd => "absurd",
        }
    }

    /// Human label used by the history listing ("Tech", "Pet", ...).
    pub fn label(&self) -> &'static str {
        match self {
            Category::Tech => "Tech",
            Category::Pet => "Pet",
            Category::Health => "Health",
            Category::Absurd => "Absurd",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
