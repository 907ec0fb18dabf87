//! Menu text and user-facing outcome lines.

use std::io::Write;

use anyhow::Result;

use crate::core::{Container, InventoryError, Transfer};
use crate::input::MenuChoice;
use crate::types::{TransferAction, SWAP_BLOCK_LEN};

/// Menu label for a choice.
pub fn choice_label(choice: MenuChoice) -> &'static str {
    match choice {
        MenuChoice::Exit => "Exit",
        MenuChoice::Transfer(action) => action_label(action),
    }
}

pub fn action_label(action: TransferAction) -> &'static str {
    match action {
        TransferAction::Play => "Play piece (take from the queue)",
        TransferAction::Reserve => "Reserve piece (move from the queue to the stack)",
        TransferAction::UseReserved => "Use reserved piece (take from the stack top)",
        TransferAction::SwapFront => "Swap the queue front with the stack top",
        TransferAction::SwapBlock => "Swap the first 3 queue pieces with the 3 stack pieces",
    }
}

/// Append the action menu and the prompt to `out`.
pub fn render_menu_into(out: &mut Vec<u8>) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Actions:")?;
    writeln!(out, "Code\tAction")?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}\t{}", choice.code(), choice_label(choice))?;
    }
    write!(out, "Choose an option: ")?;
    Ok(())
}

/// One-line description of a committed transfer.
pub fn describe_transfer(transfer: &Transfer) -> String {
    match transfer {
        Transfer::Played { piece, .. } => format!("Piece played: {}", piece),
        Transfer::Reserved { piece, .. } => format!("Piece {} reserved!", piece),
        Transfer::Used { piece } => format!("Piece used from reserve: {}", piece),
        Transfer::SwappedFront { to_stack, to_queue } => {
            format!("Swapped {} (queue) with {} (stack).", to_stack, to_queue)
        }
        Transfer::SwappedBlock { .. } => format!(
            "Swapped the first {n} queue pieces with the top {n} reserved pieces.",
            n = SWAP_BLOCK_LEN
        ),
    }
}

/// One-line description of a rejected transfer.
pub fn describe_error(err: &InventoryError) -> String {
    match err {
        InventoryError::Underflow {
            container: Container::Queue,
        } => "No pieces available in the queue!".to_string(),
        InventoryError::Underflow {
            container: Container::Stack,
        } => "No reserved pieces available!".to_string(),
        InventoryError::CapacityExceeded {
            container: Container::Stack,
            piece,
        } => format!("Reserve stack is full! {} was discarded.", piece),
        InventoryError::CapacityExceeded {
            container: Container::Queue,
            piece,
        } => format!("Queue is full! {} could not be added.", piece),
        InventoryError::PreconditionFailed {
            required,
            queue_len,
            stack_len,
        } => format!(
            "At least {} pieces are needed in each container to swap (queue: {}, stack: {}).",
            required, queue_len, stack_len
        ),
        InventoryError::IndexOutOfRange { .. } => format!("Internal error: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Piece, PieceId, Shape};

    fn piece(shape: Shape, id: u64) -> Piece {
        Piece::new(shape, PieceId(id))
    }

    #[test]
    fn menu_lists_codes_in_order() {
        let mut out = Vec::new();
        render_menu_into(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let codes: Vec<&str> = text
            .lines()
            .filter_map(|l| l.split('\t').next())
            .filter(|c| c.len() == 1)
            .collect();
        assert_eq!(codes, vec!["1", "2", "3", "4", "5", "0"]);
        assert!(text.ends_with("Choose an option: "));
    }

    #[test]
    fn transfer_messages() {
        assert_eq!(
            describe_transfer(&Transfer::Played {
                piece: piece(Shape::I, 0),
                refill: piece(Shape::O, 5),
            }),
            "Piece played: [I 0]"
        );
        assert_eq!(
            describe_transfer(&Transfer::Reserved {
                piece: piece(Shape::T, 2),
                refill: piece(Shape::O, 5),
            }),
            "Piece [T 2] reserved!"
        );
        assert_eq!(
            describe_transfer(&Transfer::SwappedFront {
                to_stack: piece(Shape::L, 3),
                to_queue: piece(Shape::I, 0),
            }),
            "Swapped [L 3] (queue) with [I 0] (stack)."
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            describe_error(&InventoryError::Underflow {
                container: Container::Stack
            }),
            "No reserved pieces available!"
        );
        assert_eq!(
            describe_error(&InventoryError::CapacityExceeded {
                container: Container::Stack,
                piece: piece(Shape::O, 7),
            }),
            "Reserve stack is full! [O 7] was discarded."
        );
        assert!(describe_error(&InventoryError::PreconditionFailed {
            required: 3,
            queue_len: 5,
            stack_len: 1,
        })
        .contains("stack: 1"));
    }
}
