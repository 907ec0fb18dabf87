//! Interactive loop: show state, show menu, read a choice, apply it.
//!
//! Generic over the supplier, the output and the input so integration tests
//! can drive a whole session from an in-memory script.

use std::io::{BufRead, Write};

use anyhow::Result;
use serde_json::json;
use tracing::{debug, info};

use crate::core::{Inventory, InventorySnapshot, PieceSupplier};
use crate::input::{ChoiceReader, MenuChoice};
use crate::term::{describe_error, describe_transfer, ConsoleRenderer, Tone};
use crate::types::TransferAction;

pub const FAREWELL: &str = "Closing the piece manager...";

/// How the state is shown before each prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateFormat {
    /// The boxed text frame
    #[default]
    Text,
    /// One JSON object per line: the state before each prompt, then an
    /// `{"event", "action", "message"}` object for each outcome
    Json,
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub committed: u32,
    pub rejected: u32,
    pub invalid_inputs: u32,
}

/// Run until the player picks 0 or input ends.
pub fn run<S, W, R>(
    inventory: &mut Inventory<S>,
    renderer: &mut ConsoleRenderer<W>,
    reader: &mut ChoiceReader<R>,
    format: StateFormat,
) -> Result<SessionSummary>
where
    S: PieceSupplier,
    W: Write,
    R: BufRead,
{
    let mut summary = SessionSummary::default();
    let mut snap = InventorySnapshot::default();

    loop {
        inventory.snapshot_into(&mut snap);
        match format {
            StateFormat::Text => {
                renderer.draw_state(&snap)?;
                renderer.draw_menu()?;
            }
            StateFormat::Json => renderer.line(&serde_json::to_string(&snap)?)?,
        }

        let choice = match reader.next_choice()? {
            Some(Ok(choice)) => choice,
            Some(Err(err)) => {
                summary.invalid_inputs += 1;
                let text = format!("Invalid option ({})! Try again.", err);
                report(renderer, format, Tone::Failure, "invalid", None, &text)?;
                continue;
            }
            None => {
                debug!("input closed");
                MenuChoice::Exit
            }
        };

        let action = match choice {
            MenuChoice::Exit => break,
            MenuChoice::Transfer(action) => action,
        };

        match inventory.apply(action) {
            Ok(transfer) => {
                summary.committed += 1;
                let text = describe_transfer(&transfer);
                report(renderer, format, Tone::Success, "committed", Some(action), &text)?;
            }
            Err(err) => {
                summary.rejected += 1;
                let text = describe_error(&err);
                report(renderer, format, Tone::Failure, "rejected", Some(action), &text)?;
            }
        }
    }

    report(renderer, format, Tone::Info, "exit", None, FAREWELL)?;
    info!(
        committed = summary.committed,
        rejected = summary.rejected,
        invalid_inputs = summary.invalid_inputs,
        "session ended"
    );
    Ok(summary)
}

/// One outcome line, as a styled message or a JSON event
fn report<W: Write>(
    renderer: &mut ConsoleRenderer<W>,
    format: StateFormat,
    tone: Tone,
    event: &str,
    action: Option<TransferAction>,
    text: &str,
) -> Result<()> {
    match format {
        StateFormat::Text => renderer.message(tone, text),
        StateFormat::Json => {
            let line = json!({
                "event": event,
                "action": action.map(|a| a.as_str()),
                "message": text,
            });
            renderer.line(&line.to_string())
        }
    }
}
