//! Terminal front-end for the strictly_hanoi engine.
//!
//! Plays the part of the UI: parses commands, loads settings, renders pegs
//! as text and inserts the animation delay between requesting and applying
//! each planned move.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod interactive;
mod render;
mod settings;
mod terminal;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Settings
pub use settings::{CONFIG_ENV, Settings, SettingsError};

// Crate-level exports - Presentation
pub use interactive::{Input, InputError, Session};
pub use render::{render, render_plan};
pub use terminal::{TerminalAnimator, cancel_on_ctrl_c};
