//! Imperative shell around the pure core.
//!
//! This module holds everything that reads or writes a stream: choice
//! parsing, the emergency switch token, and the interactive menu loop.
//! The core never prints; the shell renders journaled events and status
//! projections onto whatever `Write` sink it was given.

pub mod error;
pub mod menu;

pub use error::MenuError;
pub use menu::{parse_switch, MenuChoice, MenuShell};
