//! Dialog state tag for the per-session state machine.
//!
//! States form a closed, enumerable set. No state carries extra data
//! beyond the tag: everything a turn needs comes from the utterance and
//! the collaborators, so the machine dispatches on the tag alone.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// The active state of one conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogState {
    Hello,
    Choice,
    ScanUrl,
    Translator,
    Weather,
    Maps,
    Exit,
}

impl Default for DialogState {
    fn default() -> Self {
        DialogState::Hello
    }
}

impl fmt::Display for DialogState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DialogState::Hello => "hello",
            DialogState::Choice => "choice",
            DialogState::ScanUrl => "scan_url",
            DialogState::Translator => "translator",
            DialogState::Weather => "weather",
            DialogState::Maps => "maps",
            DialogState::Exit => "exit",
        };
        write!(f, "{name}")
    }
}

impl FromStr for DialogState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hello" => Ok(DialogState::Hello),
            "choice" => Ok(DialogState::Choice),
            "scan_url" => Ok(DialogState::ScanUrl),
            "translator" => Ok(DialogState::Translator),
            "weather" => Ok(DialogState::Weather),
            "maps" => Ok(DialogState::Maps),
            "exit" => Ok(DialogState::Exit),
            other => Err(format!("unknown dialog state: '{other}'")),
        }
    }
}

impl DialogState {
    /// All states, in dispatch-table order.
    pub const ALL: [DialogState; 7] = [
        DialogState::Hello,
        DialogState::Choice,
        DialogState::ScanUrl,
        DialogState::Translator,
        DialogState::Weather,
        DialogState::Maps,
        DialogState::Exit,
    ];
}
