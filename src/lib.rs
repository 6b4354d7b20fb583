//! # pubdate
//!
//! Best-effort publication date guessing for web documents.
//!
//! ## Overview
//!
//! Many pages never declare an authoritative publication timestamp, but the
//! date usually leaks out somewhere: the article path (`/2020/03/15/…`),
//! structured metadata (`article:published_time`, JSON-LD `datePublished`),
//! a visible timestamp element, or the date-stamped path of the social
//! preview image. `pubdate` collects every such signal, parses each raw
//! fragment with a multi-format date grammar table, and arbitrates the
//! conflicting, variously-confident candidates into a single best [`Guess`].
//!
//! A guess carries the date (UTC), an [`Accuracy`] tier saying how much of
//! the timestamp the signal actually pinned down, and a [`GuessMethod`]
//! provenance tag for diagnostics. A stronger candidate only displaces a
//! weaker adopted one when it is also temporally plausible: within 45 days
//! of a month-level guess, within 2 days of a date-level one. That keeps a
//! stray comment timestamp from steamrolling a sound date found in the URL.
//!
//! ## Basic Usage
//!
//! ```rust
//! use pubdate::{Accuracy, DateGuesser};
//!
//! let html = r#"
//!     <html><head>
//!         <meta property="article:published_time" content="2020-03-15T10:30:00Z" />
//!     </head><body></body></html>
//! "#;
//!
//! let guesser = DateGuesser::new();
//! let guess = guesser.guess_date("https://example.com/some-article", html);
//!
//! assert_eq!(guess.accuracy, Accuracy::DateTime);
//! ```
//!
//! ## No guess is a value, not an error
//!
//! The guessing core never fails. Malformed URLs, broken markup, and
//! unparseable date strings all degrade to "no signal"; the worst-case
//! result is [`Guess::none()`].
//!
//! ```rust
//! use pubdate::DateGuesser;
//!
//! let guess = DateGuesser::new().guess_date("not even a url", "<p>no dates here</p>");
//! assert!(guess.is_none());
//! ```
//!
//! ## Concurrency
//!
//! Each call to [`DateGuesser::guess_date`] parses its own document and
//! keeps its own fold accumulator, so one guesser can be shared freely
//! across threads for independent `(url, html)` inputs.

mod dates;
mod error;
mod guess;
mod guesser;
mod html;
mod options;
mod urls;

// Public exports
pub use error::{PubdateError, Result};
pub use guess::{Accuracy, Guess, GuessMethod};
pub use guesser::DateGuesser;
pub use options::{GuessOptions, GuessOptionsBuilder};
