//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction, RenderOptions};
pub use commands::{
    build_catalog, dispatch, glyph_source, handle_config_action, render_once, resolve_settings,
    run_shell, start_session, CliError,
};
pub use enums::{Output, Round};
