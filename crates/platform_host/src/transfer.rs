//! Upload and download models shared by the explorer and the browser transfer adapter.

use std::{future::Future, pin::Pin};

use serde::{Deserialize, Serialize};

/// File extensions whose uploads are read as UTF-8 text regardless of the reported MIME type.
pub const TEXT_FILE_EXTENSIONS: [&str; 7] = ["txt", "css", "ts", "js", "json", "html", "md"];

/// Object-safe boxed future used by [`FileTransferService`] async methods.
pub type TransferFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How the browser adapter turns a picked file into stored content.
pub enum UploadReadMode {
    /// `FileReader.readAsDataURL`; used for images so they survive a reload.
    DataUrl,
    /// `FileReader.readAsText`.
    Text,
    /// `URL.createObjectURL`; valid only for the current page session.
    ObjectUrl,
}

impl UploadReadMode {
    /// Chooses the read mode for a file from its name and reported MIME type.
    pub fn for_file(name: &str, mime_type: &str) -> Self {
        if mime_type.starts_with("image/") {
            return Self::DataUrl;
        }
        if mime_type.starts_with("text/") || has_text_extension(name) {
            return Self::Text;
        }
        Self::ObjectUrl
    }
}

fn has_text_extension(name: &str) -> bool {
    let Some((_, ext)) = name.rsplit_once('.') else {
        return false;
    };
    let ext = ext.to_ascii_lowercase();
    TEXT_FILE_EXTENSIONS.contains(&ext.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A file picked by the user and read into memory.
pub struct UploadedFile {
    /// File name as reported by the browser.
    pub name: String,
    /// MIME type as reported by the browser (may be empty).
    pub mime_type: String,
    /// Size in bytes as reported by the browser.
    pub size: u64,
    /// Text, data URL, or object URL, depending on [`UploadReadMode`].
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Where a download gets its bytes from.
pub enum DownloadSource {
    /// Content is already addressable (`data:` or `blob:` URL).
    Url(String),
    /// Plain text that must be wrapped in a `text/plain` blob.
    Text(String),
    /// The file has no content; a zero-byte file is downloaded.
    Empty,
}

impl DownloadSource {
    /// Classifies stored file content for download.
    pub fn for_content(content: Option<&str>) -> Self {
        match content {
            Some(url) if url.starts_with("data:") || url.starts_with("blob:") => {
                Self::Url(url.to_string())
            }
            Some(text) => Self::Text(text.to_string()),
            None => Self::Empty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A request to save a virtual file to the user's machine.
pub struct DownloadRequest {
    /// Suggested file name for the browser save dialog.
    pub file_name: String,
    /// Content source.
    pub source: DownloadSource,
}

impl DownloadRequest {
    /// Builds a request for a file with the given name and stored content.
    pub fn new(file_name: impl Into<String>, content: Option<&str>) -> Self {
        Self {
            file_name: file_name.into(),
            source: DownloadSource::for_content(content),
        }
    }
}

/// Host service for moving files between the user's machine and the virtual tree.
pub trait FileTransferService {
    /// Opens the host file picker and reads every selected file.
    ///
    /// Resolves to an empty list when the picker is dismissed.
    fn pick_files<'a>(&'a self) -> TransferFuture<'a, Result<Vec<UploadedFile>, String>>;

    /// Starts a browser download for `request`.
    ///
    /// # Errors
    ///
    /// Returns an error when the host cannot create the download link.
    fn download(&self, request: &DownloadRequest) -> Result<(), String>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn read_mode_prefers_mime_type_then_extension() {
        let cases = [
            ("photo.png", "image/png", UploadReadMode::DataUrl),
            ("notes", "text/plain", UploadReadMode::Text),
            ("api.ts", "video/mp2t", UploadReadMode::Text),
            ("README.MD", "", UploadReadMode::Text),
            ("song.mp3", "audio/mpeg", UploadReadMode::ObjectUrl),
            ("archive.tar.gz", "application/gzip", UploadReadMode::ObjectUrl),
            ("Makefile", "", UploadReadMode::ObjectUrl),
        ];

        for (name, mime, expected) in cases {
            assert_eq!(
                UploadReadMode::for_file(name, mime),
                expected,
                "name={name:?} mime={mime:?}"
            );
        }
    }

    #[test]
    fn download_source_keeps_urls_and_wraps_text() {
        assert_eq!(
            DownloadSource::for_content(Some("data:image/png;base64,AAAA")),
            DownloadSource::Url("data:image/png;base64,AAAA".to_string())
        );
        assert_eq!(
            DownloadSource::for_content(Some("blob:http://localhost/1234")),
            DownloadSource::Url("blob:http://localhost/1234".to_string())
        );
        assert_eq!(
            DownloadSource::for_content(Some("hello")),
            DownloadSource::Text("hello".to_string())
        );
        assert_eq!(DownloadSource::for_content(None), DownloadSource::Empty);
    }
}
