use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::Result;

/// Write an uploaded vendor document and return the stored path
pub async fn save_document(upload_dir: &str, file_name: &str, bytes: &[u8]) -> Result<String> {
    tokio::fs::create_dir_all(upload_dir).await?;

    let stored_name = format!("{}_{}", Uuid::new_v4(), sanitize_file_name(file_name));
    let path: PathBuf = Path::new(upload_dir).join(stored_name);
    tokio::fs::write(&path, bytes).await?;

    tracing::info!("Stored vendor document at {}", path.display());
    Ok(path.to_string_lossy().into_owned())
}

/// Strip directories and unusual characters from a client supplied file name
fn sanitize_file_name(file_name: &str) -> String {
    let base = Path::new(file_name)
        .file_name()
        .and_then(|name| name.to_str())
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
        "document".to_string()
    } else {
        cleaned
    }
}
