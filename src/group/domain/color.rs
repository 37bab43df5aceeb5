//! Fixed color palette for projects and teams.

use super::GroupDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Accent color shown next to a project or team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupColor {
    /// Blue, the form default.
    #[default]
    Blue,
    /// Green.
    Green,
    /// Purple.
    Purple,
    /// Pink.
    Pink,
    /// Red.
    Red,
    /// Yellow.
    Yellow,
    /// Indigo.
    Indigo,
    /// Teal.
    Teal,
}

impl GroupColor {
    /// The whole palette in picker order.
    pub const ALL: [Self; 8] = [
        Self::Blue,
        Self::Green,
        Self::Purple,
        Self::Pink,
        Self::Red,
        Self::Yellow,
        Self::Indigo,
        Self::Teal,
    ];

    /// Returns the wire literal.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Indigo => "indigo",
            Self::Teal => "teal",
        }
    }
}

impl fmt::Display for GroupColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for GroupColor {
    type Error = GroupDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == normalized)
            .ok_or_else(|| GroupDomainError::UnknownColor(value.to_owned()))
    }
}
