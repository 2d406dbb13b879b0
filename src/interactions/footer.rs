use chrono::{Datelike, Local};
use web_sys::Document;

/// Year literal baked into the static footer markup.
const PLACEHOLDER_YEAR: &str = "2024";

/// Replaces the first occurrence of the placeholder year, so a year
/// appearing later in the line is left alone.
pub fn update_copyright(text: &str, year: i32) -> String {
    text.replacen(PLACEHOLDER_YEAR, &year.to_string(), 1)
}

/// Rewrites the footer's hard-coded copyright year to the current one.
/// No-op when the paragraph or the literal is missing.
pub fn wire_copyright_year(document: &Document) {
    if let Ok(Some(footer)) = document.query_selector(".footer-bottom p") {
        let text = footer.inner_html();
        if text.contains(PLACEHOLDER_YEAR) {
            footer.set_inner_html(&update_copyright(&text, Local::now().year()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_year_becomes_the_given_year() {
        assert_eq!(
            update_copyright("© 2024 Clientist. All rights reserved.", 2026),
            "© 2026 Clientist. All rights reserved."
        );
        assert_eq!(update_copyright("© 2024 Clientist", 2031), "© 2031 Clientist");
    }

    #[test]
    fn text_without_the_placeholder_is_untouched() {
        assert_eq!(update_copyright("© Clientist", 2026), "© Clientist");
    }

    #[test]
    fn only_the_first_occurrence_is_rewritten() {
        assert_eq!(
            update_copyright("© 2024 Clientist (est. 2024)", 2026),
            "© 2026 Clientist (est. 2024)"
        );
    }
}
