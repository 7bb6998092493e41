use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;

/// Vehicle colors.
pub const COLORS: &[&str] = &[
    "red",
    "green",
    "blue",
    "yellow",
    "purple",
    "mint green",
    "teal",
    "white",
    "black",
    "orange",
    "pink",
    "grey",
    "maroon",
    "violet",
    "turquoise",
    "tan",
    "sky blue",
    "salmon",
    "plum",
    "orchid",
    "olive",
    "magenta",
    "lime",
    "ivory",
    "indigo",
    "gold",
    "fuchsia",
    "cyan",
    "azure",
    "lavender",
    "silver",
];

/// Words appended to a person name to form a dealer name.
pub const DEALER_SUFFIXES: &[&str] = &[
    "Autos", "Cars", "Deals", "Group", "LLC", "Lot", "Motors", "Rides", "Sales", "Transit",
    "Venture",
];

/// Color and dealer-suffix lists used by the dealer generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub colors: Vec<String>,
    pub suffixes: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: COLORS.iter().map(|s| s.to_string()).collect(),
            suffixes: DEALER_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Palette {
    pub fn new(colors: Vec<String>, suffixes: Vec<String>) -> Self {
        Self { colors, suffixes }
    }

    /// Default suffixes with a custom color list.
    pub fn with_colors<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            colors: colors.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.colors.is_empty() {
            return Err(GenerationError::InvalidConfig(
                "palette needs at least one color".to_string(),
            ));
        }
        if self.suffixes.is_empty() {
            return Err(GenerationError::InvalidConfig(
                "palette needs at least one dealer suffix".to_string(),
            ));
        }
        Ok(())
    }
}
