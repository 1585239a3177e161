use crate::error::{ProfileError, Result};
use crate::patcher::ProfilePatcher;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Profile document chosen for patching
#[derive(Debug, Clone)]
pub struct ProfileDocument {
    pub path: PathBuf,
    pub content: String,
}

/// Pick the first candidate that exists and contains at least one marker pair.
pub async fn select_document(
    patcher: &ProfilePatcher,
    candidates: &[&Path],
) -> Result<ProfileDocument> {
    for path in candidates {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Profile document not found");
                continue;
            }
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                warn!(path = %path.display(), "Profile document is not valid UTF-8");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if patcher.has_markers(&content) {
            debug!(path = %path.display(), "Selected profile document");
            return Ok(ProfileDocument {
                path: path.to_path_buf(),
                content,
            });
        }

        warn!(path = %path.display(), "Profile document has no repository markers");
    }

    let names: Vec<String> = candidates.iter().map(|p| p.display().to_string()).collect();
    Err(ProfileError::MissingMarkers(format!(
        "none of [{}] contain repository markers",
        names.join(", ")
    )))
}

/// Overwrite the document in place.
pub async fn write_document(path: &Path, content: &str) -> Result<()> {
    tokio::fs::write(path, content).await?;
    Ok(())
}
