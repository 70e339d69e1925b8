//! Line protocol read from the host on stdin.
//!
//! A line starting with `{` is an inbound push. Any other non-empty line is a
//! gesture word:
//!
//! | Line                     | Gesture                 |
//! |--------------------------|-------------------------|
//! | `hero`                   | tap on the hero panel   |
//! | `next` / `prev`          | page the enemy viewer   |
//! | `swipe <start> <end>`    | horizontal swipe        |
//! | `tap <unit-id>`          | tap on an enemy         |
//! | `quit`                   | quit button             |

use std::num::ParseFloatError;

use serde_json::Value;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub enum HostLine {
    Push(Value),
    Gesture(Gesture),
    Blank,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Gesture {
    HeroPanel,
    Next,
    Prev,
    Swipe { start_x: f32, end_x: f32 },
    Tap(String),
    Quit,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("push is not valid JSON")]
    InvalidJson(#[source] serde_json::Error),

    #[error("unknown gesture '{0}'")]
    UnknownGesture(String),

    #[error("gesture '{gesture}' needs {argument}")]
    MissingArgument {
        gesture: &'static str,
        argument: &'static str,
    },

    #[error("gesture '{0}' takes no further arguments")]
    TrailingArguments(&'static str),

    #[error("invalid coordinate '{value}'")]
    InvalidCoordinate {
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Parses one stdin line.
pub fn parse_line(line: &str) -> Result<HostLine, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(HostLine::Blank);
    }

    if line.starts_with('{') {
        return serde_json::from_str(line)
            .map(HostLine::Push)
            .map_err(InputError::InvalidJson);
    }

    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(HostLine::Blank);
    };

    let gesture = match word.to_ascii_lowercase().as_str() {
        "hero" => no_arguments("hero", words, Gesture::HeroPanel)?,
        "next" => no_arguments("next", words, Gesture::Next)?,
        "prev" => no_arguments("prev", words, Gesture::Prev)?,
        "quit" => no_arguments("quit", words, Gesture::Quit)?,
        "tap" => {
            let unit_id = words.next().ok_or(InputError::MissingArgument {
                gesture: "tap",
                argument: "a unit id",
            })?;
            no_arguments("tap", words, Gesture::Tap(unit_id.to_owned()))?
        }
        "swipe" => {
            let start_x = coordinate(words.next())?;
            let end_x = coordinate(words.next())?;
            no_arguments("swipe", words, Gesture::Swipe { start_x, end_x })?
        }
        _ => return Err(InputError::UnknownGesture(word.to_owned())),
    };

    Ok(HostLine::Gesture(gesture))
}

fn no_arguments<'a>(
    name: &'static str,
    mut rest: impl Iterator<Item = &'a str>,
    gesture: Gesture,
) -> Result<Gesture, InputError> {
    match rest.next() {
        Some(_) => Err(InputError::TrailingArguments(name)),
        None => Ok(gesture),
    }
}

fn coordinate(word: Option<&str>) -> Result<f32, InputError> {
    let word = word.ok_or(InputError::MissingArgument {
        gesture: "swipe",
        argument: "start and end coordinates",
    })?;
    word.parse().map_err(|source| InputError::InvalidCoordinate {
        value: word.to_owned(),
        source,
    })
}
