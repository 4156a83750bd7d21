//! Date helper functions for WordPress date strings

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a WordPress date: `post_date` style or an RSS `pubDate`
///
/// Drafts carry zero dates (`0000-00-00 00:00:00`), which yield `None`.
pub fn parse_wp_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let formats = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];
    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }

    DateTime::parse_from_rfc2822(s)
        .ok()
        .map(|dt| dt.naive_local())
}

/// Format a WordPress date as `YYYY-MM-DD`, falling back to the raw text
pub fn format_day(s: &str) -> String {
    match parse_wp_date(s) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None if s.trim().is_empty() => "----------".to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_post_date() {
        let dt = parse_wp_date("2016-02-01 10:00:00").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2016-02-01 10:00");
    }

    #[test]
    fn test_parse_pub_date() {
        let dt = parse_wp_date("Mon, 01 Feb 2016 10:00:00 +0000").unwrap();
        assert_eq!(dt.format("%Y-%m-%d").to_string(), "2016-02-01");
    }

    #[test]
    fn test_zero_date() {
        assert!(parse_wp_date("0000-00-00 00:00:00").is_none());
        assert_eq!(format_day("0000-00-00 00:00:00"), "0000-00-00 00:00:00");
    }

    #[test]
    fn test_format_day() {
        assert_eq!(format_day("2016-02-05 08:30:00"), "2016-02-05");
        assert_eq!(format_day(""), "----------");
        assert_eq!(format_day("someday"), "someday");
    }
}
