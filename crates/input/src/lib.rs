//! Console input module.
//!
//! Turns lines typed at the numeric menu into [`MenuChoice`]s. It knows
//! nothing about the inventory itself; the binary dispatches the choice.

pub mod choice;
pub mod reader;

pub use tetris_stack_types as types;

pub use choice::{parse_choice, ChoiceError, MenuChoice};
pub use reader::ChoiceReader;
