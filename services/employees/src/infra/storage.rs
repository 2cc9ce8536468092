//! Local filesystem photo store.
//!
//! Layout:
//! ```text
//! {asset_root}/
//!   {photos_dir}/
//!     emp_1.png
//!     emp_2.jpg
//! ```
//! Stored paths handed to callers use the public form
//! `/uploads/{photos_dir}/{file}`.

use std::io;
use std::path::{Component, Path, PathBuf};

use bytes::Bytes;
use tokio::fs;
use tracing::{debug, info, warn};

use hrportal_domain::asset_key::{AssetKey, extension_of};

use crate::domain::repository::AssetStore;
use crate::error::EmployeesServiceError;

/// URL prefix under which stored files are exposed.
pub const PUBLIC_UPLOADS_PREFIX: &str = "/uploads";

const WRITE_PROBE: &str = ".write-probe";

/// Outcome of mapping a stored path onto the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Absolute path strictly inside the store root.
    Contained(PathBuf),
    /// The path escapes the root.
    Denied,
}

#[derive(Debug, Clone)]
pub struct LocalAssetStore {
    root: PathBuf,
    public_prefix: String,
}

impl LocalAssetStore {
    /// Prepare `{asset_root}/{photos_dir}` and return a store rooted there.
    ///
    /// Creates missing directories and fails if the directory is not
    /// writable, so misconfiguration surfaces at startup.
    pub async fn open(
        asset_root: impl AsRef<Path>,
        photos_dir: &str,
    ) -> Result<Self, EmployeesServiceError> {
        let mut components = Path::new(photos_dir).components();
        if !matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        ) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("photos directory must be a single path segment: {photos_dir:?}"),
            )
            .into());
        }

        let dir = asset_root.as_ref().join(photos_dir);
        fs::create_dir_all(&dir).await?;

        let probe = dir.join(WRITE_PROBE);
        fs::write(&probe, b"").await.map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("photo directory is not writable: {}: {e}", dir.display()),
            )
        })?;
        fs::remove_file(&probe).await?;

        let root = fs::canonicalize(&dir).await?;
        info!(root = %root.display(), "photo store ready");
        Ok(Self {
            root,
            public_prefix: format!("{PUBLIC_UPLOADS_PREFIX}/{photos_dir}/"),
        })
    }

    /// Absolute root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a stored path (public form, `./name` or bare file name) to an
    /// absolute path, refusing anything that lands outside the root.
    pub fn resolve(&self, stored_path: &str) -> Resolution {
        let relative = self.strip_known_prefix(stored_path);
        let candidate = normalize_lexically(&self.root.join(relative));
        if candidate != self.root && candidate.starts_with(&self.root) {
            Resolution::Contained(candidate)
        } else {
            Resolution::Denied
        }
    }

    /// Cheap readiness check: the root is still a directory.
    pub async fn probe(&self) -> io::Result<()> {
        let meta = fs::metadata(&self.root).await?;
        if meta.is_dir() {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("{} is not a directory", self.root.display()),
            ))
        }
    }

    fn strip_known_prefix<'a>(&self, stored_path: &'a str) -> &'a str {
        let public = self.public_prefix.as_str();
        stored_path
            .strip_prefix(public)
            .or_else(|| stored_path.strip_prefix(&public[1..]))
            .or_else(|| stored_path.strip_prefix("./"))
            .unwrap_or(stored_path)
    }

    fn contained(&self, stored_path: &str) -> Result<PathBuf, EmployeesServiceError> {
        match self.resolve(stored_path) {
            Resolution::Contained(path) => Ok(path),
            Resolution::Denied => {
                warn!(path = %stored_path, "path escapes photo store root");
                Err(EmployeesServiceError::AccessDenied)
            }
        }
    }
}

impl AssetStore for LocalAssetStore {
    async fn save(
        &self,
        key: &AssetKey,
        payload: &[u8],
        original_file_name: Option<&str>,
    ) -> Result<Option<String>, EmployeesServiceError> {
        if payload.is_empty() {
            return Ok(None);
        }
        let file_name = format!("{key}{}", extension_of(original_file_name.unwrap_or("")));
        let target = self.contained(&file_name)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await?;
        }
        if let Err(e) = fs::write(&target, payload).await {
            let _ = fs::remove_file(&target).await;
            return Err(e.into());
        }
        debug!(path = %target.display(), bytes = payload.len(), "photo saved");
        Ok(Some(format!("{}{file_name}", self.public_prefix)))
    }

    async fn load(&self, stored_path: &str) -> Result<Bytes, EmployeesServiceError> {
        if stored_path.is_empty() {
            return Err(EmployeesServiceError::PhotoNotFound);
        }
        let path = self.contained(stored_path)?;
        match fs::read(&path).await {
            Ok(data) => Ok(Bytes::from(data)),
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::NotFound
                        | io::ErrorKind::PermissionDenied
                        | io::ErrorKind::IsADirectory
                ) =>
            {
                debug!(path = %path.display(), error = %e, "photo not readable");
                Err(EmployeesServiceError::PhotoNotFound)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, stored_path: &str) -> Result<bool, EmployeesServiceError> {
        if stored_path.is_empty() {
            return Ok(false);
        }
        let path = self.contained(stored_path)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(path = %path.display(), "photo deleted");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, stored_path: &str) -> Result<bool, EmployeesServiceError> {
        if stored_path.is_empty() {
            return Ok(false);
        }
        let path = self.contained(stored_path)?;
        Ok(fs::try_exists(&path).await?)
    }
}

/// Resolve `.` and `..` without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
