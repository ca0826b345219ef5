//! Meander - A fast, terminal-based tour route viewer.
//!
//! Meander reads a plain-text list of 2D coordinates (one stop per line, two
//! whitespace-separated floating-point fields) and renders the closed tour in
//! the terminal: every stop as a marker, consecutive stops joined by line
//! segments in visit order, and a closing segment from the last stop back to
//! the first.
//!
//! # Features
//!
//! - Plain-text route loading with line-precise parse errors
//! - Scatter + path + closing-segment chart rendering
//! - Vim-style stop cursor with coordinate readout
//! - Gruvbox color themes
//! - Clipboard route summaries
//!
//! # Example
//!
//! ```ignore
//! use meander::route::RouteReader;
//! use std::path::Path;
//!
//! // Load a tour
//! let route = RouteReader::read_file(Path::new("result.txt"))?;
//! println!("Loaded {} stops", route.len());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod error;
pub mod route;
pub mod ui;
pub mod util;

pub use error::{MeanderError, Result};
