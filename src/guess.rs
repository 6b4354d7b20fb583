//! The guess data model: accuracy tiers, provenance tags, and the `Guess` record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// How much of the timestamp a guess pins down.
///
/// Tiers form a total order from weakest to strongest:
/// `None < Partial < Date < DateTime`. The ordering is the sole basis for
/// deciding whether one guess is stronger than another.
///
/// - `None`: no usable signal.
/// - `Partial`: year and month only (the day is pinned to the 1st).
/// - `Date`: a full calendar date.
/// - `DateTime`: calendar date plus time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accuracy {
    None,
    Partial,
    Date,
    DateTime,
}

impl Accuracy {
    /// Numeric rank backing the tier order.
    ///
    /// Kept explicit rather than leaning on declaration order so the
    /// ordering survives reorganizing the enum.
    fn rank(self) -> u8 {
        match self {
            Accuracy::None => 0,
            Accuracy::Partial => 1,
            Accuracy::Date => 2,
            Accuracy::DateTime => 3,
        }
    }
}

impl PartialOrd for Accuracy {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Accuracy {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

/// Which signal source produced a guess.
///
/// Purely informational; arbitration never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessMethod {
    /// No signal source (the empty guess).
    None,
    /// A date pattern embedded in a URL (page URL or preview-image URL).
    Url,
    /// A date-bearing element or metadata entry in the page markup.
    Html,
}

/// A candidate publication date with its confidence tier and provenance.
///
/// Guesses are immutable snapshots. The arbitration fold only ever chooses
/// between two of them and carries the winner forward.
///
/// ## Example
///
/// ```rust
/// use pubdate::{Accuracy, Guess};
///
/// let guess = Guess::none();
/// assert_eq!(guess.accuracy, Accuracy::None);
/// assert!(guess.date.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    /// The guessed moment, in UTC. Absent exactly when `accuracy` is `None`.
    pub date: Option<DateTime<Utc>>,
    /// Confidence tier implied by the signal that produced the date.
    pub accuracy: Accuracy,
    /// Signal source, for diagnostics only.
    pub method: GuessMethod,
}

impl Guess {
    /// Build a guess, normalizing degenerate inputs.
    ///
    /// A guess without a date, or tagged `Accuracy::None`, collapses to the
    /// canonical empty guess so the `accuracy == None ⇔ date absent`
    /// invariant always holds.
    pub fn new(date: Option<DateTime<Utc>>, accuracy: Accuracy, method: GuessMethod) -> Self {
        match date {
            Some(date) if accuracy != Accuracy::None => Self {
                date: Some(date),
                accuracy,
                method,
            },
            _ => Self::none(),
        }
    }

    /// The empty guess: no date, no accuracy, no source.
    pub fn none() -> Self {
        Self {
            date: None,
            accuracy: Accuracy::None,
            method: GuessMethod::None,
        }
    }

    /// True when this guess carries no information.
    pub fn is_none(&self) -> bool {
        self.accuracy == Accuracy::None
    }
}

impl Default for Guess {
    fn default() -> Self {
        Self::none()
    }
}
