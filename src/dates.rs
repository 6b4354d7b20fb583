//! Multi-format date string parsing.
//!
//! Raw candidate strings found in URLs and markup arrive in many shapes:
//! RFC 3339 timestamps in `article:published_time` metadata, RFC 2822 dates
//! in syndication leftovers, bare calendar dates, and loose "March 2020"
//! fragments. [`MultiDateParser`] tries an ordered table of grammars, most
//! specific first, and reports the accuracy tier guaranteed by whichever
//! grammar accepted the string.

use crate::guess::Accuracy;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// One grammar the parser can try against a candidate string.
#[derive(Debug, Clone, Copy)]
enum DateGrammar {
    /// RFC 3339 / ISO 8601 with offset, e.g. `2020-03-15T10:30:00Z`.
    Rfc3339,
    /// RFC 2822, e.g. `Sun, 15 Mar 2020 10:30:00 +0000`.
    Rfc2822,
    /// Naive datetime strftime pattern; the result is assumed UTC.
    DateTime(&'static str),
    /// Calendar-date strftime pattern; midnight UTC.
    Date(&'static str),
    /// Year-and-month strftime pattern carrying a `%d` slot. chrono has no
    /// year-month-only parser, so the day of month is pinned to the 1st
    /// before parsing.
    YearMonth(&'static str),
}

impl DateGrammar {
    fn parse(self, raw: &str) -> Option<DateTime<Utc>> {
        match self {
            DateGrammar::Rfc3339 => DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            DateGrammar::Rfc2822 => DateTime::parse_from_rfc2822(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            DateGrammar::DateTime(pattern) => NaiveDateTime::parse_from_str(raw, pattern)
                .ok()
                .map(|dt| dt.and_utc()),
            DateGrammar::Date(pattern) => NaiveDate::parse_from_str(raw, pattern)
                .ok()
                .and_then(midnight_utc),
            DateGrammar::YearMonth(pattern) => {
                NaiveDate::parse_from_str(&format!("1 {}", raw), pattern)
                    .ok()
                    .and_then(midnight_utc)
            }
        }
    }
}

fn midnight_utc(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}

/// A grammar bound to the accuracy tier it guarantees when it matches.
#[derive(Debug, Clone, Copy)]
struct DateFormat {
    grammar: DateGrammar,
    accuracy: Accuracy,
}

/// Grammar table, most specific first. The first grammar that accepts the
/// whole string wins; partial matches across grammars are never reconciled.
///
/// Month-name grammars use chrono's English strftime tables; this parser is
/// bound to that single locale.
const FORMATS: &[DateFormat] = &[
    DateFormat {
        grammar: DateGrammar::Rfc3339,
        accuracy: Accuracy::DateTime,
    },
    DateFormat {
        grammar: DateGrammar::Rfc2822,
        accuracy: Accuracy::DateTime,
    },
    DateFormat {
        grammar: DateGrammar::DateTime("%Y-%m-%dT%H:%M:%S%.f"),
        accuracy: Accuracy::DateTime,
    },
    DateFormat {
        grammar: DateGrammar::DateTime("%Y-%m-%d %H:%M:%S"),
        accuracy: Accuracy::DateTime,
    },
    DateFormat {
        grammar: DateGrammar::DateTime("%B %d, %Y %H:%M"),
        accuracy: Accuracy::DateTime,
    },
    DateFormat {
        grammar: DateGrammar::Date("%Y-%m-%d"),
        accuracy: Accuracy::Date,
    },
    DateFormat {
        grammar: DateGrammar::Date("%Y/%m/%d"),
        accuracy: Accuracy::Date,
    },
    DateFormat {
        grammar: DateGrammar::Date("%m/%d/%Y"),
        accuracy: Accuracy::Date,
    },
    DateFormat {
        grammar: DateGrammar::Date("%B %d, %Y"),
        accuracy: Accuracy::Date,
    },
    DateFormat {
        grammar: DateGrammar::Date("%d %B %Y"),
        accuracy: Accuracy::Date,
    },
    DateFormat {
        grammar: DateGrammar::Date("%Y%m%d"),
        accuracy: Accuracy::Date,
    },
    DateFormat {
        grammar: DateGrammar::YearMonth("%d %B %Y"),
        accuracy: Accuracy::Partial,
    },
    DateFormat {
        grammar: DateGrammar::YearMonth("%d %Y-%m"),
        accuracy: Accuracy::Partial,
    },
];

/// Tries a descending sequence of date grammars against raw candidate
/// strings and reports the accuracy tier of the first match.
#[derive(Debug, Clone)]
pub(crate) struct MultiDateParser {
    formats: &'static [DateFormat],
}

impl MultiDateParser {
    pub(crate) fn new() -> Self {
        Self { formats: FORMATS }
    }

    /// Parse a raw candidate string, if there is one.
    ///
    /// Absent or unrecognized input degrades to `(None, Accuracy::None)`;
    /// this never fails.
    pub(crate) fn parse(&self, raw: Option<&str>) -> (Option<DateTime<Utc>>, Accuracy) {
        let Some(raw) = raw else {
            return (None, Accuracy::None);
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return (None, Accuracy::None);
        }

        for format in self.formats {
            if let Some(date) = format.grammar.parse(trimmed) {
                return (Some(date), format.accuracy);
            }
        }

        (None, Accuracy::None)
    }
}
