//! HTML helper functions

use chrono::{DateTime, Utc};

use super::date::date_xml;

/// Generate an anchor tag
pub fn link_to(href: &str, text: &str) -> String {
    format!(r#"<a href="{}">{}</a>"#, html_escape(href), html_escape(text))
}

/// Generate an image tag
pub fn image_tag(src: &str, alt: &str) -> String {
    format!(
        r#"<img src="{}" alt="{}">"#,
        html_escape(src),
        html_escape(alt)
    )
}

/// Generate a <time> element; undated values render the label only
pub fn time_tag(date: Option<&DateTime<Utc>>, label: &str) -> String {
    match date {
        Some(date) => format!(
            r#"<time datetime="{}">{}</time>"#,
            date_xml(date),
            html_escape(label)
        ),
        None => format!("<time>{}</time>", html_escape(label)),
    }
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_link_and_image() {
        assert_eq!(link_to("/blog", "Back"), r#"<a href="/blog">Back</a>"#);
        assert_eq!(
            image_tag("/m/a.png", "A \"quote\""),
            r#"<img src="/m/a.png" alt="A &quot;quote&quot;">"#
        );
    }

    #[test]
    fn test_time_tag() {
        let date = Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(
            time_tag(Some(&date), "Jan 15, 2026"),
            r#"<time datetime="2026-01-15T00:00:00.000+00:00">Jan 15, 2026</time>"#
        );
        assert_eq!(time_tag(None, "No date"), "<time>No date</time>");
    }
}
