//! Date-fragment extraction from URLs.
//!
//! News CMSes routinely embed the publication date in the article path
//! (`/2020/03/15/my-article`), in query parameters (`?date=2020-03-15`), or
//! as a compact `yyyymmdd` token. Preview-image URLs follow the same
//! conventions, so the same patterns serve both.

use once_cell::sync::Lazy;
use regex::Regex;

/// An ordered URL pattern rule.
///
/// Each rule captures `year`/`month` (and optionally `day`) groups that are
/// already numerically constrained by the pattern itself, and normalizes
/// them into an ISO-style fragment the multi-format parser understands.
struct UrlDatePattern {
    regex: Regex,
}

impl UrlDatePattern {
    fn new(pattern: &str) -> Self {
        Self {
            regex: Regex::new(pattern).expect("url date pattern must compile"),
        }
    }

    fn fragment(&self, url: &str) -> Option<String> {
        let captures = self.regex.captures(url)?;
        let year = captures.name("year")?.as_str();
        let month = captures.name("month")?.as_str();

        match captures.name("day") {
            Some(day) => Some(format!("{year}-{:0>2}-{:0>2}", month, day.as_str())),
            None => Some(format!("{year}-{:0>2}", month)),
        }
    }
}

/// Pattern rules in priority order: full dates before year/month fragments.
///
/// Years are limited to 19xx/20xx so article ids and port numbers don't get
/// mistaken for dates; months and days are range-checked in the pattern.
static URL_DATE_PATTERNS: Lazy<Vec<UrlDatePattern>> = Lazy::new(|| {
    vec![
        // Separated year/month/day: /2020/03/15/, 2020-03-15, ?date=2020-03-15
        UrlDatePattern::new(
            r"[/\-_=](?P<year>(?:19|20)\d{2})[/\-_](?P<month>0?[1-9]|1[0-2])[/\-_](?P<day>0?[1-9]|[12]\d|3[01])(?:[/\-_.?#]|$)",
        ),
        // Compact token: /20200315/, _20200315.jpg
        UrlDatePattern::new(
            r"[/\-_=](?P<year>(?:19|20)\d{2})(?P<month>0[1-9]|1[0-2])(?P<day>0[1-9]|[12]\d|3[01])(?:[/\-_.?#]|$)",
        ),
        // Year and month only: /2020/03/
        UrlDatePattern::new(
            r"[/\-_=](?P<year>(?:19|20)\d{2})[/\-_](?P<month>0?[1-9]|1[0-2])(?:[/?#]|$)",
        ),
    ]
});

/// Scan a URL for an embedded date and normalize it into a parser-ready
/// fragment: `"2020-03-15"` for full dates, `"2020-03"` for year/month.
///
/// The first matching pattern wins. Malformed URLs simply fail to match.
pub(crate) fn find_date_fragment(url: &str) -> Option<String> {
    URL_DATE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.fragment(url))
}
