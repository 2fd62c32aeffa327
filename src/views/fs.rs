//! Filesystem-backed view loader.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;

use crate::views::loader::ViewLoader;
use crate::views::types::{LoadError, ViewId, ViewUnit};

/// Loads `<dir>/<ViewId>.<extension>` with `tokio::fs`.
#[derive(Debug, Clone)]
pub struct FsViewLoader {
    dir: PathBuf,
    extension: String,
}

impl FsViewLoader {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// Path of the module file for `id`.
    pub fn module_path(&self, id: &ViewId) -> PathBuf {
        self.dir.join(format!("{}.{}", id, self.extension))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ViewLoader for FsViewLoader {
    fn load<'a>(&'a self, id: &'a ViewId) -> BoxFuture<'a, Result<ViewUnit, LoadError>> {
        Box::pin(async move {
            let path = self.module_path(id);
            tracing::debug!(view = %id, path = ?path, "Reading view module");

            match tokio::fs::read_to_string(&path).await {
                Ok(source) => Ok(ViewUnit::new(id.clone(), source)),
                Err(e) if e.kind() == ErrorKind::NotFound => Err(LoadError::NotFound(id.clone())),
                Err(e) => Err(LoadError::Io(e)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fs_loader() {
        let dir = std::env::temp_dir().join(format!("view-router-fs-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("Dashboard.html"), "<h1>Dashboard</h1>").unwrap();

        let loader = FsViewLoader::new(&dir, "html");
        let unit = loader.load(&ViewId::new("Dashboard")).await.unwrap();
        assert_eq!(unit.source, "<h1>Dashboard</h1>");

        let missing = loader.load(&ViewId::new("ManagerUser")).await;
        assert!(matches!(missing, Err(LoadError::NotFound(id)) if id.as_str() == "ManagerUser"));

        // Cleanup
        std::fs::remove_dir_all(&dir).unwrap_or_default();
    }
}
