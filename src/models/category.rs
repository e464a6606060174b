//! Transaction and goal categories
//!
//! A closed set; the display labels are the Portuguese names the app shows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Spending/income category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Housing,
    Transport,
    Entertainment,
    Health,
    Education,
    Salary,
    Investment,
    Others,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 9] = [
        Self::Food,
        Self::Housing,
        Self::Transport,
        Self::Entertainment,
        Self::Health,
        Self::Education,
        Self::Salary,
        Self::Investment,
        Self::Others,
    ];

    /// Display label (Portuguese, as shown in the UI and exports)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Alimentação",
            Self::Housing => "Moradia",
            Self::Transport => "Transporte",
            Self::Entertainment => "Lazer",
            Self::Health => "Saúde",
            Self::Education => "Educação",
            Self::Salary => "Salário",
            Self::Investment => "Investimento",
            Self::Others => "Outros",
        }
    }

    /// Parse a category from an English keyword or its Portuguese label
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" | "alimentação" | "alimentacao" => Some(Self::Food),
            "housing" | "moradia" => Some(Self::Housing),
            "transport" | "transporte" => Some(Self::Transport),
            "entertainment" | "lazer" => Some(Self::Entertainment),
            "health" | "saúde" | "saude" => Some(Self::Health),
            "education" | "educação" | "educacao" => Some(Self::Education),
            "salary" | "salário" | "salario" => Some(Self::Salary),
            "investment" | "investimento" => Some(Self::Investment),
            "others" | "outros" | "other" => Some(Self::Others),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Category::Food.to_string(), "Alimentação");
        assert_eq!(Category::Salary.to_string(), "Salário");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Category::parse("food"), Some(Category::Food));
        assert_eq!(Category::parse("Alimentação"), Some(Category::Food));
        assert_eq!(Category::parse("lazer"), Some(Category::Entertainment));
        assert_eq!(Category::parse("unknown"), None);
    }

    #[test]
    fn test_all_covers_every_label() {
        for cat in Category::ALL {
            assert_eq!(Category::parse(cat.label()), Some(cat));
        }
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Category::Health).unwrap();
        assert_eq!(json, "\"health\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Health);
    }
}
