use colored::Colorize;
use std::fmt;

/// Message categories used by the console output helpers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MessageKind {
    Section,
    Error,
}

/// Applies the console style for `kind`. Colouring follows `colored`'s
/// environment handling, so `NO_COLOR` yields the plain text.
pub fn styled(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    match kind {
        MessageKind::Section => text.as_str().bold().to_string(),
        MessageKind::Error => text.as_str().red().to_string(),
    }
}

pub fn section(message: impl fmt::Display) -> String {
    styled(MessageKind::Section, message)
}

pub fn error(message: impl fmt::Display) -> String {
    styled(MessageKind::Error, message)
}
