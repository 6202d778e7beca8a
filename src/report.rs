//! Rendering helpers for the demo binaries. Pure string work, no I/O.

/// How much of a body the demos show before cutting off.
pub const PREVIEW_CHARS: usize = 100;

/// First [`PREVIEW_CHARS`] characters of the body, decoded lossily.
/// Shorter bodies come back whole.
pub fn preview(body: &[u8]) -> String {
    String::from_utf8_lossy(body)
        .chars()
        .take(PREVIEW_CHARS)
        .collect()
}

/// Commentary line for the status codes the demos care about.
pub fn status_line(status: u16) -> Option<&'static str> {
    match status {
        200 => Some("Result: Success! The page is live."),
        404 => Some("Result: Failed. Page not found."),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_previews_whole() {
        assert_eq!(preview(b"hello"), "hello");
        assert_eq!(preview(b""), "");
    }

    #[test]
    fn long_body_cuts_at_preview_length() {
        let body = "x".repeat(500);
        let shown = preview(body.as_bytes());
        assert_eq!(shown.chars().count(), PREVIEW_CHARS);
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        // 150 two-byte characters; a byte-oriented cut at 100 would land
        // mid-character.
        let body = "é".repeat(150);
        let shown = preview(body.as_bytes());
        assert_eq!(shown.chars().count(), PREVIEW_CHARS);
        assert!(shown.chars().all(|c| c == 'é'));
    }

    #[test]
    fn invalid_utf8_does_not_panic() {
        let shown = preview(&[0xff, 0xfe, b'o', b'k']);
        assert!(shown.ends_with("ok"));
    }

    #[test]
    fn status_commentary_covers_the_demo_codes() {
        assert!(status_line(200).unwrap().contains("Success"));
        assert!(status_line(404).unwrap().contains("not found"));
        assert_eq!(status_line(500), None);
        assert_eq!(status_line(301), None);
    }
}
