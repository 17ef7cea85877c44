//! Display helpers shared by the preview and search views.

use platform_host::TEXT_FILE_EXTENSIONS;

const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Formats a byte count with base-1024 units, rounded to two decimals.
///
/// ```
/// use explorer_store::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 B");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded} {}", SIZE_UNITS[unit])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// How the preview pane renders a file body.
pub enum PreviewKind {
    /// `<img>`.
    Image,
    /// `<audio controls>`.
    Audio,
    /// `<video controls>`.
    Video,
    /// Full-height `<iframe>` with no header or controls.
    Pdf,
    /// Editable text.
    Text,
    /// "Preview unavailable" message.
    Unsupported,
}

impl PreviewKind {
    /// Classifies a file the same way uploads decide how to read it.
    ///
    /// `image/*` wins, then `text/*` and the text extensions, then the audio, video, and PDF
    /// checks. A `.ts` file served as `video/mp2t` is therefore text.
    pub fn classify(mime_type: &str, name: &str) -> Self {
        if mime_type.starts_with("image/") {
            return Self::Image;
        }
        let extension = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        if mime_type.starts_with("text/") || TEXT_FILE_EXTENSIONS.contains(&extension.as_str()) {
            return Self::Text;
        }
        if mime_type.starts_with("audio/") {
            return Self::Audio;
        }
        if mime_type.starts_with("video/") {
            return Self::Video;
        }
        if mime_type == "application/pdf" || extension == "pdf" {
            return Self::Pdf;
        }
        Self::Unsupported
    }

    /// Whether the preview shows the name/size header and action buttons.
    pub fn shows_chrome(self) -> bool {
        self != Self::Pdf
    }
}

#[cfg(test)]
mod tests {
    use platform_host::UploadReadMode;

    use super::*;

    #[test]
    fn sizes_scale_through_units() {
        let cases = [
            (0, "0 B"),
            (1, "1 B"),
            (1023, "1023 B"),
            (1024, "1 KB"),
            (1536, "1.5 KB"),
            (2048, "2 KB"),
            (1_234_567, "1.18 MB"),
            (5 * 1024 * 1024 * 1024, "5 GB"),
            (3 * 1024 * 1024 * 1024 * 1024, "3072 GB"),
        ];
        for (bytes, expected) in cases {
            assert_eq!(format_file_size(bytes), expected, "bytes={bytes}");
        }
    }

    #[test]
    fn preview_kind_follows_upload_read_order() {
        let cases = [
            ("image/png", "a.bin", PreviewKind::Image),
            ("audio/mpeg", "a.mp3", PreviewKind::Audio),
            ("video/mp4", "clip.mp4", PreviewKind::Video),
            ("application/pdf", "doc", PreviewKind::Pdf),
            ("", "Report.PDF", PreviewKind::Pdf),
            ("text/css", "styles", PreviewKind::Text),
            ("", "api.ts", PreviewKind::Text),
            ("video/mp2t", "api.ts", PreviewKind::Text),
            ("image/png", "icon.md", PreviewKind::Image),
            ("application/octet-stream", "blob.zip", PreviewKind::Unsupported),
            ("", "Makefile", PreviewKind::Unsupported),
        ];
        for (mime, name, expected) in cases {
            assert_eq!(PreviewKind::classify(mime, name), expected, "{mime:?} {name:?}");
        }
        assert!(!PreviewKind::Pdf.shows_chrome());
        assert_eq!(
            UploadReadMode::for_file("api.ts", "video/mp2t"),
            UploadReadMode::Text
        );
        assert!(PreviewKind::Text.shows_chrome());
    }
}
