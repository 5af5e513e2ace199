//! asciify library crate.
//!
//! Converts raster images into grids of printable characters by matching
//! each tile's perceptual brightness to the glyph density of a
//! user-editable character set. Every component is public for the binary
//! and for integration testing.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod glyph;
pub mod output;
pub mod raster;
pub mod shell;
