// Maps the user-facing quality label to a yt-dlp format selector.
// Unknown or missing labels fall back to the "best" mapping - never an error.
pub fn resolve(label: Option<&str>) -> &'static str {
    match label {
        Some("best") => "best[height<=720]",
        Some("worst") => "worst",
        Some("mp4") => "best[ext=mp4]",
        Some("360p") => "best[height<=360]",
        Some("480p") => "best[height<=480]",
        Some("720p") => "best[height<=720]",
        _ => "best[height<=720]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(resolve(Some("best")), "best[height<=720]");
        assert_eq!(resolve(Some("worst")), "worst");
        assert_eq!(resolve(Some("mp4")), "best[ext=mp4]");
        assert_eq!(resolve(Some("360p")), "best[height<=360]");
        assert_eq!(resolve(Some("480p")), "best[height<=480]");
        assert_eq!(resolve(Some("720p")), "best[height<=720]");
    }

    #[test]
    fn test_unknown_label_falls_back_to_best() {
        assert_eq!(resolve(Some("unknownlabel")), resolve(Some("best")));
        assert_eq!(resolve(Some("4k")), "best[height<=720]");
    }

    #[test]
    fn test_missing_label_falls_back_to_best() {
        assert_eq!(resolve(None), resolve(Some("best")));
    }
}
