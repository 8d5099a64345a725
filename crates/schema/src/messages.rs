//! Ordered diagnostics sink.

use std::fmt;

use crate::error::Location;

/// Severity of a [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Informational note.
    Info,
    /// A tolerated problem.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "info",
            Self::Warning => "warning",
        })
    }
}

/// One diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// How serious the message is.
    pub severity: Severity,
    /// Human-readable text.
    pub text: String,
    /// Where the message applies, if anywhere in particular.
    pub location: Option<Location>,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{}: {location}: {}", self.severity, self.text),
            None => write!(f, "{}: {}", self.severity, self.text),
        }
    }
}

/// Messages in the order they were emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageContainer {
    messages: Vec<Message>,
}

impl MessageContainer {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message.
    pub fn add(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Appends an informational note.
    pub fn info(&mut self, text: impl Into<String>, location: Option<Location>) {
        self.add(Message {
            severity: Severity::Info,
            text: text.into(),
            location,
        });
    }

    /// Appends a warning.
    pub fn warning(&mut self, text: impl Into<String>, location: Option<Location>) {
        self.add(Message {
            severity: Severity::Warning,
            text: text.into(),
            location,
        });
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` when no message was emitted.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterates messages in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Iterates warnings only.
    pub fn warnings(&self) -> impl Iterator<Item = &Message> {
        self.messages
            .iter()
            .filter(|m| m.severity == Severity::Warning)
    }

    /// Removes all messages.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl<'a> IntoIterator for &'a MessageContainer {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
