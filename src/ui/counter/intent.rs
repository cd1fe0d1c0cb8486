use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::ui::mvi::Intent;

/// The two things a user can do to the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterIntent {
    Increment,
    Reset,
}

impl Intent for CounterIntent {}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action '{0}', expected 'increment' or 'reset'")]
pub struct ParseActionError(pub String);

impl FromStr for CounterIntent {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "increment" | "inc" | "+" => Ok(CounterIntent::Increment),
            "reset" | "r" => Ok(CounterIntent::Reset),
            _ => Err(ParseActionError(s.to_string())),
        }
    }
}

impl fmt::Display for CounterIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CounterIntent::Increment => f.write_str("increment"),
            CounterIntent::Reset => f.write_str("reset"),
        }
    }
}
