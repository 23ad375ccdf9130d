use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::AppleDay;

use super::{decode_document, ContentError, ContentSource};

/// Apples exported to a JSON file, in the same shape the query API returns.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ContentSource for FileSource {
    async fn fetch_apples(&self) -> Result<Vec<AppleDay>, ContentError> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ContentError::Io {
                path: self.path.clone(),
                source,
            })?;
        decode_document(&body)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn reads_apples_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "result": [{{ "date": "2026-01-01", "appleName": "Honeycrisp" }}] }}"#
        )
        .unwrap();

        let source = FileSource::new(file.path());
        let apples = source.fetch_apples().await.unwrap();
        assert_eq!(apples.len(), 1);
        assert_eq!(apples[0].slug, "honeycrisp");
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("nope.json"));
        let result = source.fetch_apples().await;
        assert!(matches!(result, Err(ContentError::Io { .. })));
    }
}
