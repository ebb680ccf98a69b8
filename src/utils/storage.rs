use crate::types::StorageContext;
use axum_typed_multipart::FieldData;
use std::path::Path;
use tempfile::NamedTempFile;
use ulid::Ulid;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("upload failed: {0}")]
    UploadFailed(#[from] std::io::Error),
}

fn file_name_for(original: Option<&str>) -> String {
    let extension = original
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| ext.to_ascii_lowercase());

    match extension {
        Some(ext) => format!("{}.{}", Ulid::new(), ext),
        None => Ulid::new().to_string(),
    }
}

/// Moves an uploaded file into the upload directory and returns the stored
/// path, which is what gets recorded on the owning record.
pub async fn upload_file(
    cfg: &StorageContext,
    file: FieldData<NamedTempFile>,
) -> Result<String, Error> {
    tokio::fs::create_dir_all(&cfg.upload_dir).await?;

    let destination = cfg
        .upload_dir
        .join(file_name_for(file.metadata.file_name.as_deref()));

    tokio::fs::copy(file.contents.path(), &destination)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to store uploaded file at {}: {}",
                destination.display(),
                err
            );
            err
        })?;

    Ok(destination.to_string_lossy().into_owned())
}

/// Removes a file stored by [`upload_file`] that ended up unused. Failures are
/// only logged.
pub async fn discard_file(path: &str) {
    if let Err(err) = tokio::fs::remove_file(path).await {
        tracing::warn!("Failed to discard unused upload {}: {}", path, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_a_sane_extension() {
        let name = file_name_for(Some("avatar.PNG"));
        assert!(name.ends_with(".png"));
        assert_eq!(name.len(), 26 + 4);
    }

    #[test]
    fn drops_missing_or_odd_extensions() {
        assert_eq!(file_name_for(None).len(), 26);
        assert_eq!(file_name_for(Some("avatar")).len(), 26);
        assert_eq!(file_name_for(Some("../evil.p/ng")).len(), 26);
    }
}
