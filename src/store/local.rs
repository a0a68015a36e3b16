use crate::store::{ContentStore, FetchError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Serves content straight from a directory holding the site (`data/*.json`, `articles/*.html`).
pub struct LocalContentStore {
    pub root_path: PathBuf,
}

impl LocalContentStore {
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }
}

/// Maps a site-relative path below `root`, refusing anything that would climb out of it.
pub fn verify_site_path(root: &Path, path: &str) -> Result<PathBuf, FetchError> {
    let mut resolved = root.to_path_buf();
    let mut depth: usize = 0;

    for component in Path::new(path.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => {
                resolved.push(part);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth == 0 {
                    return Err(FetchError::OutsideRoot {
                        path: path.to_string(),
                    });
                }
                resolved.pop();
                depth -= 1;
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(FetchError::OutsideRoot {
                    path: path.to_string(),
                });
            }
        }
    }

    Ok(resolved)
}

#[async_trait]
impl ContentStore for LocalContentStore {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let verified = verify_site_path(&self.root_path, path)?;

        tokio::fs::read_to_string(&verified)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => FetchError::NotFound {
                    path: path.to_string(),
                },
                _ => FetchError::Transport {
                    path: path.to_string(),
                    reason: e.to_string(),
                },
            })
    }
}
