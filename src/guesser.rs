//! The [`DateGuesser`]: signal orchestration and the arbitration fold.
//!
//! This is the decision core. Every signal source produces a [`Guess`], and
//! the guesser folds them in a fixed order into a single running best guess:
//! first the page URL, then each markup checker piped through the
//! multi-format parser, then the preview-image URL re-run through the URL
//! patterns.

use crate::dates::MultiDateParser;
use crate::guess::{Accuracy, Guess, GuessMethod};
use crate::html::{self, TagChecker};
use crate::options::GuessOptions;
use crate::urls;
use scraper::Html;
use url::Url;

/// Plausibility window for a `Partial` current guess: a stronger newcomer
/// must land within this many calendar days to be trusted. Month-level
/// guesses tolerate the most slack.
const PARTIAL_WINDOW_DAYS: i64 = 45;

/// Plausibility window for a `Date` current guess.
const DATE_WINDOW_DAYS: i64 = 2;

/// Guesses the publication date of a web document from its URL, its markup,
/// and its social-preview image URL.
///
/// The whole operation is a pure function of `(url, html)`: no I/O, no
/// shared mutable state across calls, and no failure mode — the worst case
/// is the empty guess.
///
/// ## Example
///
/// ```rust
/// use pubdate::{Accuracy, DateGuesser};
///
/// let guesser = DateGuesser::new();
/// let guess = guesser.guess_date(
///     "https://example.com/2020/03/15/launch-day",
///     "<html><head></head><body></body></html>",
/// );
///
/// assert_eq!(guess.accuracy, Accuracy::Date);
/// ```
#[derive(Debug, Clone)]
pub struct DateGuesser {
    /// Locale-bound multi-format parser shared by all signal sources.
    parser: MultiDateParser,

    /// Markup checkers in fixed priority order.
    tag_checkers: Vec<TagChecker>,

    /// Configuration options
    options: GuessOptions,
}

impl DateGuesser {
    /// Create a guesser with default options.
    pub fn new() -> Self {
        Self::with_options(GuessOptions::default())
    }

    /// Create a guesser with custom options.
    pub fn with_options(options: GuessOptions) -> Self {
        let tag_checkers = html::tag_checkers()
            .into_iter()
            .filter(|checker| !(options.disable_json_ld && matches!(checker, TagChecker::JsonLd)))
            .collect();

        Self {
            parser: MultiDateParser::new(),
            tag_checkers,
            options,
        }
    }

    /// Guess the publication date of a webpage.
    ///
    /// # Arguments
    /// * `url` - the URL the page was retrieved from
    /// * `html` - the raw HTML of the page
    ///
    /// Never fails on malformed input; if no signal source yields anything
    /// usable the result is [`Guess::none()`].
    pub fn guess_date(&self, url: &str, html: &str) -> Guess {
        let mut guess = self.fold(Guess::none(), self.guess_from_url(url), "page url");

        let document = Html::parse_document(html);
        for checker in &self.tag_checkers {
            let raw = checker.check(&document);
            let (date, accuracy) = self.parser.parse(raw.as_deref());
            let candidate = Guess::new(date, accuracy, GuessMethod::Html);
            guess = self.fold(guess, candidate, &checker.description());
        }

        if let Some(image_url) = html::find_preview_image(&document) {
            let resolved = resolve_reference(url, &image_url);
            let candidate = self.guess_from_url(&resolved);
            guess = self.fold(guess, candidate, "preview-image url");
        }

        guess
    }

    /// Guess from a URL alone, without any markup.
    ///
    /// Applies the ordered URL pattern rules and promotes the first match
    /// through the multi-format parser.
    pub fn guess_from_url(&self, url: &str) -> Guess {
        match urls::find_date_fragment(url) {
            Some(fragment) => {
                let (date, accuracy) = self.parser.parse(Some(&fragment));
                Guess::new(date, accuracy, GuessMethod::Url)
            }
            None => Guess::none(),
        }
    }

    fn fold(&self, current: Guess, new: Guess, source: &str) -> Guess {
        let chosen = Self::choose_better_guess(current.clone(), new);
        if self.options.debug && chosen != current {
            eprintln!("pubdate: adopted {:?} guess from {}", chosen.accuracy, source);
        }
        chosen
    }

    /// Decide whether a new guess supersedes the current one.
    ///
    /// A newcomer must be strictly stronger, and when the current guess
    /// already carries information the newcomer must also be temporally
    /// plausible: within 45 days of a month-level guess, within 2 days of a
    /// date-level one. This guards against a spurious high-confidence match
    /// elsewhere on the page overriding a weaker but contextually sound
    /// guess. A `DateTime` guess is never superseded; ties keep `current`.
    fn choose_better_guess(current: Guess, new: Guess) -> Guess {
        if current.accuracy >= new.accuracy {
            return current;
        }
        if current.accuracy == Accuracy::None {
            return new;
        }

        let window_days = match current.accuracy {
            Accuracy::Partial => PARTIAL_WINDOW_DAYS,
            Accuracy::Date => DATE_WINDOW_DAYS,
            _ => return current,
        };

        // Both guesses carry dates here: current is above None, and new
        // outranks it. Distance is measured in calendar days.
        match (current.date, new.date) {
            (Some(current_date), Some(new_date))
                if (current_date.date_naive() - new_date.date_naive())
                    .num_days()
                    .abs()
                    < window_days =>
            {
                new
            }
            _ => current,
        }
    }
}

impl Default for DateGuesser {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a possibly-relative reference (an `og:image` value) against the
/// page URL. Falls back to the reference verbatim when resolution fails.
fn resolve_reference(base: &str, reference: &str) -> String {
    match Url::parse(base).and_then(|base| base.join(reference)) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => reference.to_string(),
    }
}
