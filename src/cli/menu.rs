//! Menu entries of the interactive session.

use std::fmt;
use std::str::FromStr;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Delete,
    Edit,
    FindByName,
    Show,
    Save,
    Load,
    Exit,
    FindByPhone,
}

impl MenuChoice {
    /// Entries in the order they are printed.
    pub const ALL: [MenuChoice; 9] = [
        Self::Add,
        Self::Delete,
        Self::Edit,
        Self::FindByName,
        Self::Show,
        Self::Save,
        Self::Load,
        Self::Exit,
        Self::FindByPhone,
    ];

    /// Number the user types to pick this entry.
    pub fn key(self) -> u8 {
        match self {
            Self::Add => 1,
            Self::Delete => 2,
            Self::Edit => 3,
            Self::FindByName => 4,
            Self::Show => 5,
            Self::Save => 6,
            Self::Load => 7,
            Self::Exit => 8,
            Self::FindByPhone => 9,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Add Record",
            Self::Delete => "Delete Record",
            Self::Edit => "Edit Record",
            Self::FindByName => "Find Record",
            Self::Show => "Show Records",
            Self::Save => "Save to File",
            Self::Load => "Load from File",
            Self::Exit => "Exit",
            Self::FindByPhone => "Find Record by Phone",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.key(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("Unknown choice: {}", s.trim()))?;
        Self::ALL
            .into_iter()
            .find(|choice| choice.key() == key)
            .ok_or_else(|| format!("Unknown choice: {}", key))
    }
}
