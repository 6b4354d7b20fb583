//! End-to-end tests for the guessing pipeline: URL, markup, and
//! preview-image signals folded into one answer.

use chrono::{TimeZone, Utc};
use pubdate::{Accuracy, DateGuesser, Guess, GuessMethod, GuessOptions};

const EMPTY_PAGE: &str = "<html><head></head><body></body></html>";

#[test]
fn test_url_path_date_is_used_when_markup_is_silent() {
    let guesser = DateGuesser::new();
    let guess = guesser.guess_date("https://example.com/2020/03/15/my-article", EMPTY_PAGE);

    assert_eq!(guess.accuracy, Accuracy::Date);
    assert_eq!(guess.method, GuessMethod::Url);
    assert_eq!(
        guess.date,
        Some(Utc.with_ymd_and_hms(2020, 3, 15, 0, 0, 0).unwrap())
    );
}

#[test]
fn test_structured_metadata_outranks_weaker_visible_text() {
    // The meta tag yields a full datetime; the visible span only a
    // month-level fragment pointing somewhere else entirely. The stronger
    // tier is adopted first and the weaker contradiction can never displace
    // it.
    let html = r#"
        <html>
            <head>
                <meta property="article:published_time" content="2020-03-15T10:30:00Z" />
            </head>
            <body>
                <span class="timestamp">June 2017</span>
            </body>
        </html>
    "#;

    let guesser = DateGuesser::new();
    let guess = guesser.guess_date("https://example.com/my-article", html);

    assert_eq!(guess.accuracy, Accuracy::DateTime);
    assert_eq!(guess.method, GuessMethod::Html);
    assert_eq!(
        guess.date,
        Some(Utc.with_ymd_and_hms(2020, 3, 15, 10, 30, 0).unwrap())
    );
}

#[test]
fn test_preview_image_url_supplies_the_date() {
    let html = r#"
        <html><head>
            <meta property="og:image" content="https://cdn.example.com/uploads/2019/11/02/cover.jpg" />
        </head><body></body></html>
    "#;

    let guesser = DateGuesser::new();
    let guess = guesser.guess_date("https://example.com/my-article", html);

    assert_eq!(guess.accuracy, Accuracy::Date);
    assert_eq!(guess.method, GuessMethod::Url);
    assert_eq!(
        guess.date,
        Some(Utc.with_ymd_and_hms(2019, 11, 2, 0, 0, 0).unwrap())
    );
}

#[test]
fn test_relative_preview_image_is_resolved_against_page_url() {
    let html = r#"
        <html><head>
            <meta property="og:image" content="/uploads/2019/11/02/cover.jpg" />
        </head><body></body></html>
    "#;

    let guesser = DateGuesser::new();
    let guess = guesser.guess_date("https://example.com/my-article", html);

    assert_eq!(guess.accuracy, Accuracy::Date);
    assert_eq!(guess.method, GuessMethod::Url);
}

#[test]
fn test_full_miss_is_the_empty_guess() {
    let html = r#"
        <html>
            <head><title>Nothing dated here</title></head>
            <body><p>Plain prose without any timestamps.</p></body>
        </html>
    "#;

    let guesser = DateGuesser::new();
    let guess = guesser.guess_date("https://example.com/about", html);

    assert_eq!(guess, Guess::none());
    assert_eq!(guess.method, GuessMethod::None);
}

#[test]
fn test_markup_datetime_refines_plausible_url_date() {
    // URL pins the calendar date; metadata adds the time of day for the
    // same day, which is inside the 2-day window.
    let html = r#"
        <html><head>
            <meta property="article:published_time" content="2020-03-15T10:30:00Z" />
        </head><body></body></html>
    "#;

    let guesser = DateGuesser::new();
    let guess = guesser.guess_date("https://example.com/2020/03/15/my-article", html);

    assert_eq!(guess.accuracy, Accuracy::DateTime);
    assert_eq!(guess.method, GuessMethod::Html);
    assert_eq!(
        guess.date,
        Some(Utc.with_ymd_and_hms(2020, 3, 15, 10, 30, 0).unwrap())
    );
}

#[test]
fn test_implausible_markup_datetime_does_not_displace_url_date() {
    // The metadata timestamp is months away from the URL date; the
    // plausibility window rejects it even though its tier is stronger.
    let html = r#"
        <html><head>
            <meta property="article:published_time" content="2020-09-01T08:00:00Z" />
        </head><body></body></html>
    "#;

    let guesser = DateGuesser::new();
    let guess = guesser.guess_date("https://example.com/2020/03/15/my-article", html);

    assert_eq!(guess.accuracy, Accuracy::Date);
    assert_eq!(guess.method, GuessMethod::Url);
    assert_eq!(
        guess.date,
        Some(Utc.with_ymd_and_hms(2020, 3, 15, 0, 0, 0).unwrap())
    );
}

#[test]
fn test_partial_url_guess_upgraded_by_nearby_markup_date() {
    // /2020/03/ gives a month-level guess; a calendar date inside the
    // 45-day window upgrades it.
    let html = r#"
        <html><body>
            <time datetime="2020-03-20">March 20, 2020</time>
        </body></html>
    "#;

    let guesser = DateGuesser::new();
    let guess = guesser.guess_date("https://example.com/archive/2020/03/", html);

    assert_eq!(guess.accuracy, Accuracy::Date);
    assert_eq!(guess.method, GuessMethod::Html);
    assert_eq!(
        guess.date,
        Some(Utc.with_ymd_and_hms(2020, 3, 20, 0, 0, 0).unwrap())
    );
}

#[test]
fn test_json_ld_date_published_is_picked_up() {
    let html = r#"
        <html><head>
            <script type="application/ld+json">
            {
                "@context": "https://schema.org",
                "@type": "NewsArticle",
                "datePublished": "2020-03-15T10:30:00+02:00"
            }
            </script>
        </head><body></body></html>
    "#;

    let guesser = DateGuesser::new();
    let guess = guesser.guess_date("https://example.com/my-article", html);

    assert_eq!(guess.accuracy, Accuracy::DateTime);
    // Offsets are normalized to UTC.
    assert_eq!(
        guess.date,
        Some(Utc.with_ymd_and_hms(2020, 3, 15, 8, 30, 0).unwrap())
    );
}

#[test]
fn test_disable_json_ld_option_skips_the_checker() {
    let html = r#"
        <html><head>
            <script type="application/ld+json">
            {"@type": "Article", "datePublished": "2020-03-15"}
            </script>
        </head><body></body></html>
    "#;

    let options = GuessOptions::builder().disable_json_ld(true).build();
    let guesser = DateGuesser::with_options(options);
    let guess = guesser.guess_date("https://example.com/my-article", html);

    assert!(guess.is_none());
}

#[test]
fn test_guess_from_url_alone() {
    let guesser = DateGuesser::new();

    let guess = guesser.guess_from_url("https://example.com/2019/11/02/launch");
    assert_eq!(guess.accuracy, Accuracy::Date);
    assert_eq!(guess.method, GuessMethod::Url);

    let partial = guesser.guess_from_url("https://example.com/archive/2019/11/");
    assert_eq!(partial.accuracy, Accuracy::Partial);

    assert!(guesser.guess_from_url("https://example.com/about").is_none());
}

#[test]
fn test_broken_markup_degrades_gracefully() {
    let html = "<html><head><meta property=article:published_time <<<< body>>";

    let guesser = DateGuesser::new();
    let guess = guesser.guess_date("https://example.com/2020/03/15/x", html);

    // The document parser is error-tolerant; the URL signal still lands.
    assert_eq!(guess.accuracy, Accuracy::Date);
}

#[test]
fn test_guess_round_trips_through_json() {
    let guesser = DateGuesser::new();
    let guess = guesser.guess_date("https://example.com/2020/03/15/my-article", EMPTY_PAGE);

    let encoded = serde_json::to_string(&guess).unwrap();
    let decoded: Guess = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded, guess);
}
