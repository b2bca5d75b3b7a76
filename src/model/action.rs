//! Navigation actions delivered by interaction sources.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The four cursor movements a navigation session accepts.
///
/// These represent user intent, not input mechanics. Mapping from key events
/// (or other interaction surfaces) to actions happens at the input boundary;
/// the session state machine only ever sees this closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    /// Jump to the first page.
    First,
    /// Step back one page, clamped at the first page.
    Prev,
    /// Step forward one page, clamped at the last page.
    Next,
    /// Jump to the last page.
    Last,
}

impl NavAction {
    /// All actions, in display order.
    pub const ALL: [NavAction; 4] = [
        NavAction::First,
        NavAction::Prev,
        NavAction::Next,
        NavAction::Last,
    ];

    /// The canonical token for this action.
    pub fn token(self) -> &'static str {
        match self {
            NavAction::First => "first",
            NavAction::Prev => "prev",
            NavAction::Next => "next",
            NavAction::Last => "last",
        }
    }
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Rejection of a token outside the action vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized navigation action '{token}'")]
pub struct UnrecognizedAction {
    /// The token that failed to parse.
    pub token: String,
}

impl FromStr for NavAction {
    type Err = UnrecognizedAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(NavAction::First),
            "prev" => Ok(NavAction::Prev),
            "next" => Ok(NavAction::Next),
            "last" => Ok(NavAction::Last),
            other => Err(UnrecognizedAction {
                token: other.to_string(),
            }),
        }
    }
}

// ===== Tests =====
