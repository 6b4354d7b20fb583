//! Markup signal checkers (meta tags, JSON-LD, time elements, etc.).
//!
//! Each checker inspects the parsed document for one category of
//! date-bearing evidence and hands back the raw text it found, or nothing.
//! Checkers never fail: missing or malformed markup is a normal "no signal"
//! outcome.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use serde_json::Value;

/// Longest element text a visible-timestamp checker will consider. Anything
/// bigger is a content container that happens to carry a date-ish class.
const MAX_VISIBLE_TEXT_LEN: usize = 100;

static JSON_LD_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("script[type='application/ld+json']").unwrap());

static TIME_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("time").unwrap());

static OG_IMAGE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta[property='og:image']").unwrap());

/// Leading boilerplate on visible timestamps ("Published on ...", "Posted:").
static VISIBLE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(published|posted|updated|last updated)\b[:\s]*(on\s+)?").unwrap());

/// One category of date-bearing markup evidence.
///
/// The set is fixed at construction and iterated in the order returned by
/// [`tag_checkers`]; each variant knows how to pull its raw candidate string
/// out of a parsed document.
#[derive(Debug, Clone, Copy)]
pub(crate) enum TagChecker {
    /// Schema.org JSON-LD `datePublished`.
    JsonLd,
    /// `<meta property=… content=…>`.
    MetaProperty(&'static str),
    /// `<meta name=… content=…>`.
    MetaName(&'static str),
    /// Any element with a matching `itemprop`; reads `content`, then
    /// `datetime`, then the element text.
    Itemprop(&'static str),
    /// `<time>` elements; `datetime` attribute preferred over text.
    TimeElement,
    /// Visible text of elements whose `class` mentions the keyword.
    ClassKeyword(&'static str),
}

impl TagChecker {
    /// Look for this checker's evidence category in the document.
    pub(crate) fn check(&self, document: &Html) -> Option<String> {
        match self {
            TagChecker::JsonLd => json_ld_date(document),
            TagChecker::MetaProperty(property) => {
                meta_content(document, &format!("meta[property='{property}']"))
            }
            TagChecker::MetaName(name) => meta_content(document, &format!("meta[name='{name}']")),
            TagChecker::Itemprop(property) => itemprop_value(document, property),
            TagChecker::TimeElement => time_element_value(document),
            TagChecker::ClassKeyword(keyword) => class_keyword_text(document, keyword),
        }
    }

    /// Human-readable label for debug output.
    pub(crate) fn description(&self) -> String {
        match self {
            TagChecker::JsonLd => "json-ld datePublished".to_string(),
            TagChecker::MetaProperty(property) => format!("meta[property='{property}']"),
            TagChecker::MetaName(name) => format!("meta[name='{name}']"),
            TagChecker::Itemprop(property) => format!("[itemprop='{property}']"),
            TagChecker::TimeElement => "time element".to_string(),
            TagChecker::ClassKeyword(keyword) => format!("[class*='{keyword}']"),
        }
    }
}

/// The fixed checker sequence, most authoritative signal first: structured
/// publish-date metadata, then named meta conventions, then visible
/// timestamps.
pub(crate) fn tag_checkers() -> Vec<TagChecker> {
    vec![
        TagChecker::JsonLd,
        TagChecker::MetaProperty("article:published_time"),
        TagChecker::Itemprop("datePublished"),
        TagChecker::Itemprop("dateCreated"),
        TagChecker::MetaName("date"),
        TagChecker::MetaName("dc.date.issued"),
        TagChecker::MetaName("dc.date"),
        TagChecker::MetaName("sailthru.date"),
        TagChecker::MetaName("parsely-pub-date"),
        TagChecker::MetaName("pubdate"),
        TagChecker::TimeElement,
        TagChecker::ClassKeyword("published"),
        TagChecker::ClassKeyword("timestamp"),
        TagChecker::ClassKeyword("dateline"),
    ]
}

/// Find the social-preview image reference (`og:image`), verbatim.
///
/// Preview-image URLs often embed the same date-path conventions as the
/// page URL, so the caller re-runs the URL patterns against the result.
pub(crate) fn find_preview_image(document: &Html) -> Option<String> {
    document
        .select(&OG_IMAGE_SELECTOR)
        .find_map(|meta| meta.value().attr("content"))
        .map(str::trim)
        .filter(|content| !content.is_empty())
        .map(String::from)
}

fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .find_map(|meta| meta.value().attr("content"))
        .map(str::trim)
        .filter(|content| !content.is_empty())
        .map(String::from)
}

fn itemprop_value(document: &Html, property: &str) -> Option<String> {
    let selector = Selector::parse(&format!("[itemprop='{property}']")).ok()?;

    for element in document.select(&selector) {
        let attr_value = element
            .value()
            .attr("content")
            .or_else(|| element.value().attr("datetime"));

        if let Some(value) = attr_value {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }

        let text = element.text().collect::<String>();
        let trimmed = text.trim();
        if !trimmed.is_empty() && trimmed.len() <= MAX_VISIBLE_TEXT_LEN {
            return Some(trimmed.to_string());
        }
    }

    None
}

fn time_element_value(document: &Html) -> Option<String> {
    for time in document.select(&TIME_SELECTOR) {
        if let Some(datetime) = time.value().attr("datetime") {
            let trimmed = datetime.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }

        let text = time.text().collect::<String>();
        let trimmed = text.trim();
        if !trimmed.is_empty() && trimmed.len() <= MAX_VISIBLE_TEXT_LEN {
            return Some(trimmed.to_string());
        }
    }

    None
}

fn class_keyword_text(document: &Html, keyword: &str) -> Option<String> {
    let selector = Selector::parse(&format!("[class*='{keyword}']")).ok()?;

    for element in document.select(&selector) {
        let text = element.text().collect::<String>();
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.len() > MAX_VISIBLE_TEXT_LEN {
            continue;
        }

        let stripped = VISIBLE_PREFIX.replace(trimmed, "");
        let stripped = stripped.trim();
        if !stripped.is_empty() {
            return Some(stripped.to_string());
        }
    }

    None
}

fn json_ld_date(document: &Html) -> Option<String> {
    for script in document.select(&JSON_LD_SELECTOR) {
        let content = script.text().collect::<String>();

        // Strip CDATA markers if present
        let content = content
            .trim()
            .trim_start_matches("<![CDATA[")
            .trim_end_matches("]]>")
            .trim();

        let Ok(value) = serde_json::from_str::<Value>(content) else {
            continue;
        };

        if let Some(date) = date_published(&value) {
            return Some(date);
        }
    }

    None
}

/// Walk a JSON-LD value for a non-empty `datePublished`, descending into
/// top-level arrays and `@graph` collections.
fn date_published(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => items.iter().find_map(date_published),
        Value::Object(map) => {
            if let Some(date) = map.get("datePublished").and_then(Value::as_str) {
                let trimmed = date.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
            map.get("@graph").and_then(date_published)
        }
        _ => None,
    }
}
