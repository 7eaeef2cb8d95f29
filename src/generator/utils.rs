use chrono::{DateTime, FixedOffset, NaiveDate};
use maud::html;

use crate::context::SiteInfo;

/// Links to the author's profiles. `small` is the compact variant used on article pages.
pub(super) fn render_social_bar(site: &SiteInfo, small: bool) -> String {
    if site.linkedin.is_none() && site.github.is_none() {
        return String::new();
    }
    html! {
        div.social-bar.small[small] {
            @if let Some(linkedin) = &site.linkedin {
                a.social-link.linkedin href=(linkedin) target="_blank" rel="noopener" { "LinkedIn" }
            }
            @if let Some(github) = &site.github {
                a.social-link.github href=(github) target="_blank" rel="noopener" { "GitHub" }
            }
        }
    }
    .into()
}

/// Front-matter dates are free-form strings; accepts RFC 3339 or a bare `YYYY-MM-DD`.
pub(super) fn parse_feed_date(date: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(date) {
        return Some(datetime);
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|d| d.and_utc().fixed_offset())
}
