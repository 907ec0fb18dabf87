//! Terminal presentation module.
//!
//! Renders the inventory state frame, the numeric menu and outcome
//! messages. Rendering goes into byte buffers first, so everything except
//! the final flush in [`ConsoleRenderer`] can be unit-tested.
//!
//! Goals:
//! - Keep `core` free of any output concerns
//! - Same layout with and without color

pub mod messages;
pub mod renderer;
pub mod state_view;
pub mod style;

pub use tetris_stack_core as core;
pub use tetris_stack_input as input;
pub use tetris_stack_types as types;

pub use messages::{action_label, choice_label, describe_error, describe_transfer, render_menu_into};
pub use renderer::{ConsoleRenderer, Tone};
pub use state_view::StateView;
pub use style::{shape_style, Rgb, TextStyle};
