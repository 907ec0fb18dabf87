//! Mapping from a console line to a menu choice.

use thiserror::Error;

use crate::types::TransferAction;

/// What the player picked from the numeric menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Code 0
    Exit,
    /// Codes 1 to 5
    Transfer(TransferAction),
}

impl MenuChoice {
    /// Every choice, in the order the menu lists them (transfers first, exit last).
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Transfer(TransferAction::Play),
        MenuChoice::Transfer(TransferAction::Reserve),
        MenuChoice::Transfer(TransferAction::UseReserved),
        MenuChoice::Transfer(TransferAction::SwapFront),
        MenuChoice::Transfer(TransferAction::SwapBlock),
        MenuChoice::Exit,
    ];

    /// Map a menu code to a choice.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(MenuChoice::Exit),
            1 => Some(MenuChoice::Transfer(TransferAction::Play)),
            2 => Some(MenuChoice::Transfer(TransferAction::Reserve)),
            3 => Some(MenuChoice::Transfer(TransferAction::UseReserved)),
            4 => Some(MenuChoice::Transfer(TransferAction::SwapFront)),
            5 => Some(MenuChoice::Transfer(TransferAction::SwapBlock)),
            _ => None,
        }
    }

    /// The code shown next to this choice in the menu.
    pub fn code(&self) -> u32 {
        match self {
            MenuChoice::Exit => 0,
            MenuChoice::Transfer(TransferAction::Play) => 1,
            MenuChoice::Transfer(TransferAction::Reserve) => 2,
            MenuChoice::Transfer(TransferAction::UseReserved) => 3,
            MenuChoice::Transfer(TransferAction::SwapFront) => 4,
            MenuChoice::Transfer(TransferAction::SwapBlock) => 5,
        }
    }
}

/// Why a line could not be turned into a [`MenuChoice`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceError {
    #[error("no option entered")]
    Empty,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{0} is not a menu option")]
    Unknown(u32),
}

/// Parse one input line (surrounding whitespace ignored).
pub fn parse_choice(line: &str) -> Result<MenuChoice, ChoiceError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(ChoiceError::Empty);
    }

    let code: u32 = trimmed
        .parse()
        .map_err(|_| ChoiceError::NotANumber(trimmed.to_string()))?;

    MenuChoice::from_code(code).ok_or(ChoiceError::Unknown(code))
}
