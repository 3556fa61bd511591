use once_cell::sync::Lazy;
use regex::Regex;

/// The CodeChef profile page renders the current rating inside
/// `<div class="rating-number">NNNN</div>`. Anything non-numeric (provisional
/// markers, missing element) degrades to 0 rather than failing the sync.
static RATING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"class="rating-number"[^>]*>([^<]*)<"#).expect("valid rating regex")
});

pub fn extract_rating(html: &str) -> i64 {
    RATING_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .and_then(|m| {
            // Strip a trailing "?" (provisional rating) before parsing.
            m.as_str().trim().trim_end_matches('?').parse::<i64>().ok()
        })
        .unwrap_or(0)
}
