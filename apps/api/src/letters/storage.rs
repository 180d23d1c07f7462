//! Flat-file persistence for uploads and generated letters.
//!
//! Every file name carries the request's UUID, so concurrent requests never
//! overwrite each other's documents or letters.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};
use uuid::Uuid;

const FALLBACK_UPLOAD_NAME: &str = "upload.txt";

#[derive(Debug, Clone)]
pub struct LetterStore {
    upload_dir: PathBuf,
    download_dir: PathBuf,
}

impl LetterStore {
    /// Creates both directories if they do not exist yet.
    pub async fn open(
        upload_dir: impl Into<PathBuf>,
        download_dir: impl Into<PathBuf>,
    ) -> io::Result<Self> {
        let store = Self {
            upload_dir: upload_dir.into(),
            download_dir: download_dir.into(),
        };
        fs::create_dir_all(&store.upload_dir).await?;
        fs::create_dir_all(&store.download_dir).await?;
        info!(
            "Letter store ready (uploads: {}, downloads: {})",
            store.upload_dir.display(),
            store.download_dir.display()
        );
        Ok(store)
    }

    /// Saves an uploaded document as `<request_id>_<sanitized name>`.
    pub async fn save_upload(
        &self,
        request_id: Uuid,
        original_name: &str,
        bytes: &[u8],
    ) -> io::Result<PathBuf> {
        let path = self
            .upload_dir
            .join(format!("{request_id}_{}", sanitize_file_name(original_name)));
        fs::write(&path, bytes).await?;
        debug!("Saved upload {} ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }

    /// Writes the letter and returns the file name it can be fetched back by.
    pub async fn save_letter(&self, letter_id: Uuid, letter: &str) -> io::Result<String> {
        let filename = letter_filename(letter_id);
        fs::write(self.download_dir.join(&filename), letter).await?;
        Ok(filename)
    }

    /// `Ok(None)` when the name is not a plain file name or no such letter exists.
    pub async fn read_letter(&self, filename: &str) -> io::Result<Option<String>> {
        let Some(path) = self.letter_path(filename) else {
            return Ok(None);
        };
        match fs::read_to_string(path).await {
            Ok(letter) => Ok(Some(letter)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn letter_path(&self, filename: &str) -> Option<PathBuf> {
        is_plain_file_name(filename).then(|| self.download_dir.join(filename))
    }
}

pub fn letter_filename(letter_id: Uuid) -> String {
    format!("cover_letter_{letter_id}.txt")
}

/// True for a single path component that is not `.`/`..` and has no separators.
fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

/// Keeps the last path component of a client-supplied name, restricted to a safe alphabet.
fn sanitize_file_name(name: &str) -> String {
    let base = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.trim_matches('.').is_empty() {
        FALLBACK_UPLOAD_NAME.to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = dir.path().join("a/uploads");
        let downloads = dir.path().join("b/downloads");

        LetterStore::open(&uploads, &downloads).await.unwrap();
        assert!(uploads.is_dir());
        assert!(downloads.is_dir());
    }

    #[tokio::test]
    async fn test_letter_round_trip_uses_request_scoped_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = LetterStore::open(dir.path().join("up"), dir.path().join("down"))
            .await
            .unwrap();
        let id = Uuid::new_v4();

        let filename = store.save_letter(id, "Dear team").await.unwrap();
        assert_eq!(filename, format!("cover_letter_{id}.txt"));
        assert_eq!(
            store.read_letter(&filename).await.unwrap().as_deref(),
            Some("Dear team")
        );
    }

    #[tokio::test]
    async fn test_two_letters_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let store = LetterStore::open(dir.path().join("up"), dir.path().join("down"))
            .await
            .unwrap();

        let first = store.save_letter(Uuid::new_v4(), "first").await.unwrap();
        let second = store.save_letter(Uuid::new_v4(), "second").await.unwrap();
        assert_ne!(first, second);
        assert_eq!(store.read_letter(&first).await.unwrap().as_deref(), Some("first"));
    }

    #[tokio::test]
    async fn test_read_letter_rejects_traversal_and_unknown_names() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("secret.txt"), "nope").unwrap();
        let store = LetterStore::open(dir.path().join("up"), dir.path().join("down"))
            .await
            .unwrap();

        assert_eq!(store.read_letter("../secret.txt").await.unwrap(), None);
        assert_eq!(store.read_letter("..").await.unwrap(), None);
        assert_eq!(store.read_letter("").await.unwrap(), None);
        assert_eq!(store.read_letter("cover_letter_missing.txt").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_upload_prefixes_request_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = LetterStore::open(dir.path().join("up"), dir.path().join("down"))
            .await
            .unwrap();
        let id = Uuid::new_v4();

        let path = store.save_upload(id, "../../etc/my cv.txt", b"hello").await.unwrap();
        assert_eq!(path, dir.path().join("up").join(format!("{id}_my_cv.txt")));
        assert_eq!(std::fs::read(path).unwrap(), b"hello");
    }

    #[test]
    fn test_sanitize_file_name_fallback() {
        assert_eq!(sanitize_file_name(""), FALLBACK_UPLOAD_NAME);
        assert_eq!(sanitize_file_name(".."), FALLBACK_UPLOAD_NAME);
        assert_eq!(sanitize_file_name("résumé.pdf"), "r_sum_.pdf");
    }
}
