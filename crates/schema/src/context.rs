//! Strictness policy.

use std::fmt;

use tracing::warn;

use crate::error::{Location, ParseError};
use crate::messages::MessageContainer;

const N_ISSUES: usize = 5;

/// A recoverable parse condition whose handling is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Issue {
    /// A keyword with no registered schema.
    UnknownKeyword,
    /// Fewer records than the schema's minimum.
    MissingRecords,
    /// More records than the schema's maximum.
    ExtraRecords,
    /// Fields left over after the last item of a fixed record.
    ExtraData,
    /// Trailing items filled from defaults because the record ended early.
    MissingItems,
}

impl Issue {
    /// Every issue, in declaration order.
    pub const ALL: [Issue; N_ISSUES] = [
        Issue::UnknownKeyword,
        Issue::MissingRecords,
        Issue::ExtraRecords,
        Issue::ExtraData,
        Issue::MissingItems,
    ];

    /// Snake-case name, as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Self::UnknownKeyword => "unknown_keyword",
            Self::MissingRecords => "missing_records",
            Self::ExtraRecords => "extra_records",
            Self::ExtraData => "extra_data",
            Self::MissingItems => "missing_items",
        }
    }

    /// The action applied when nothing is configured.
    pub fn default_action(self) -> Action {
        match self {
            Self::UnknownKeyword | Self::MissingRecords => Action::Warn,
            Self::ExtraRecords | Self::ExtraData => Action::Throw,
            Self::MissingItems => Action::Ignore,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What to do when an [`Issue`] occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Continue silently.
    Ignore,
    /// Continue and record a warning.
    Warn,
    /// Abort the parse.
    Throw,
}

/// Maps every [`Issue`] to an [`Action`].
///
/// The context is passed explicitly to every parse; there is no global
/// policy.
///
/// # Example
///
/// ```
/// use petra_schema::{Action, Issue, ParseContext};
///
/// let ctx = ParseContext::default().with_action(Issue::UnknownKeyword, Action::Throw);
/// assert_eq!(ctx.action(Issue::UnknownKeyword), Action::Throw);
/// assert_eq!(ctx.action(Issue::ExtraData), Action::Throw);
/// assert_eq!(ctx.action(Issue::MissingItems), Action::Ignore);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseContext {
    actions: [Action; N_ISSUES],
}

impl ParseContext {
    /// The default policy.
    pub fn new() -> Self {
        Self {
            actions: Issue::ALL.map(Issue::default_action),
        }
    }

    /// Every issue is fatal.
    pub fn strict() -> Self {
        Self {
            actions: [Action::Throw; N_ISSUES],
        }
    }

    /// Every issue is a warning.
    pub fn permissive() -> Self {
        Self {
            actions: [Action::Warn; N_ISSUES],
        }
    }

    /// Builder form of [`update`](Self::update).
    pub fn with_action(mut self, issue: Issue, action: Action) -> Self {
        self.update(issue, action);
        self
    }

    /// Sets the action for one issue.
    pub fn update(&mut self, issue: Issue, action: Action) {
        self.actions[issue as usize] = action;
    }

    /// Sets the same action for every issue.
    pub fn update_all(&mut self, action: Action) {
        self.actions = [action; N_ISSUES];
    }

    /// The action configured for `issue`.
    pub fn action(&self, issue: Issue) -> Action {
        self.actions[issue as usize]
    }

    /// Applies the configured action to an occurrence of `issue`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Rejected`] when the action is [`Action::Throw`].
    pub fn handle(
        &self,
        issue: Issue,
        message: impl Into<String>,
        location: &Location,
        messages: &mut MessageContainer,
    ) -> Result<(), ParseError> {
        let message = message.into();
        match self.action(issue) {
            Action::Ignore => Ok(()),
            Action::Warn => {
                warn!(%issue, %location, "{message}");
                messages.warning(format!("{issue}: {message}"), Some(location.clone()));
                Ok(())
            }
            Action::Throw => Err(ParseError::Rejected {
                issue,
                location: location.clone(),
                message,
            }),
        }
    }
}

impl Default for ParseContext {
    fn default() -> Self {
        Self::new()
    }
}
