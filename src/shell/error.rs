//! Input errors for the menu shell.

use thiserror::Error;

/// Errors raised while interpreting caller input.
///
/// All of these are recoverable: the shell prints the message and
/// returns to the prompt rather than stopping the session.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The menu choice was not numeric at all.
    #[error("Invalid input. Please enter a number between 1 and 4.")]
    NotANumber,

    /// The menu choice was a number outside 1..=4.
    #[error("Invalid option. Please enter 1, 2, 3, or 4.")]
    ChoiceOutOfRange,

    /// The emergency switch token was neither "on" nor "off".
    #[error("Invalid input. Type 'on' or 'off'.")]
    InvalidSwitch,
}
