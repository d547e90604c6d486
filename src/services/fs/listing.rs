use crate::core::errors::{Error, Result};
use crate::models::listing::{Entry, EntryKind, ListingResult};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::Path;
use tokio::task;

/// Answers "is this child a directory?" for the classification step.
pub trait MetadataProbe {
    fn is_dir(&self, path: &Path) -> io::Result<bool>;
}

/// Plain `fs::metadata`, which follows symlinks: a link is classified by its target.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdMetadata;

impl MetadataProbe for StdMetadata {
    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        fs::metadata(path).map(|md| md.is_dir())
    }
}

/// Lists the direct children of `base_path`, split into files and folders.
///
/// Either every child is classified or the whole call fails with
/// [`Error::DirectoryAccess`]; a partial listing is never returned.
pub fn list(base_path: &str) -> Result<ListingResult> {
    list_with(base_path, &StdMetadata)
}

/// Same as [`list`], with the per-child metadata query supplied by `probe`.
pub fn list_with<P>(base_path: &str, probe: &P) -> Result<ListingResult>
where
    P: MetadataProbe + ?Sized,
{
    tracing::debug!("listing {}", base_path);

    match list_impl(Path::new(base_path), probe) {
        Ok(result) => {
            tracing::debug!(
                "listed {}: {} files, {} folders",
                base_path,
                result.files.len(),
                result.folders.len()
            );
            Ok(result)
        }
        Err(e) => {
            tracing::warn!("failed to list {}: {}", base_path, e);
            Err(Error::directory_access(base_path, e))
        }
    }
}

/// Async variant for callers on a tokio runtime.
pub async fn list_async(base_path: &str) -> Result<ListingResult> {
    // Blocking fs IO runs on the blocking pool; semantics are identical to `list`.
    let path = base_path.to_string();

    task::spawn_blocking(move || list(&path))
        .await
        .map_err(|e| Error::directory_access(base_path, io::Error::other(e)))?
}

fn list_impl<P>(dir: &Path, probe: &P) -> io::Result<ListingResult>
where
    P: MetadataProbe + ?Sized,
{
    // Enumerate names first, then classify each one; the directory handle is
    // dropped before any metadata query runs.
    let mut names: Vec<OsString> = Vec::new();
    for entry in fs::read_dir(dir)? {
        names.push(entry?.file_name());
    }

    names
        .into_iter()
        .map(|name| {
            let is_dir = probe.is_dir(&dir.join(&name))?;
            Ok::<_, io::Error>(Entry {
                name: os_str_to_string(&name),
                kind: EntryKind::from_is_dir(is_dir),
            })
        })
        .collect()
}

fn os_str_to_string(s: impl AsRef<OsStr>) -> String {
    s.as_ref().to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tempfile::tempdir;

    /// Removes the child right before asking about it, like a concurrent `rm`.
    struct VanishingProbe<'a> {
        victim: &'a str,
    }

    impl MetadataProbe for VanishingProbe<'_> {
        fn is_dir(&self, path: &Path) -> io::Result<bool> {
            if path.file_name() == Some(OsStr::new(self.victim)) {
                fs::remove_file(path)?;
            }
            StdMetadata.is_dir(path)
        }
    }

    struct CountingProbe {
        calls: Cell<usize>,
    }

    impl MetadataProbe for CountingProbe {
        fn is_dir(&self, path: &Path) -> io::Result<bool> {
            self.calls.set(self.calls.get() + 1);
            StdMetadata.is_dir(path)
        }
    }

    #[test]
    fn child_removed_before_classification_fails_whole_call() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("keep.txt"), "k").unwrap();
        fs::write(dir.path().join("gone.txt"), "g").unwrap();
        let base = dir.path().to_string_lossy().to_string();

        let err = list_with(&base, &VanishingProbe { victim: "gone.txt" }).unwrap_err();

        assert_eq!(err.path(), base);
        let Error::DirectoryAccess { source, .. } = &err;
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().starts_with(&format!("Error accessing path {base}: ")));
    }

    #[test]
    fn probe_failure_message_is_wrapped() {
        struct Refusing;
        impl MetadataProbe for Refusing {
            fn is_dir(&self, _path: &Path) -> io::Result<bool> {
                Err(io::Error::other("stat refused"))
            }
        }

        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        let base = dir.path().to_string_lossy().to_string();

        let err = list_with(&base, &Refusing).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Error accessing path {base}: stat refused")
        );
    }

    #[test]
    fn one_metadata_query_per_child() {
        let dir = tempdir().unwrap();
        for name in ["a", "b", "c"] {
            fs::write(dir.path().join(name), name).unwrap();
        }
        fs::create_dir(dir.path().join("d")).unwrap();

        let probe = CountingProbe { calls: Cell::new(0) };
        let result = list_with(&dir.path().to_string_lossy(), &probe).unwrap();

        assert_eq!(probe.calls.get(), 4);
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn empty_directory_never_queries_probe() {
        let dir = tempdir().unwrap();
        let probe = CountingProbe { calls: Cell::new(0) };

        let result = list_with(&dir.path().to_string_lossy(), &probe).unwrap();

        assert!(result.is_empty());
        assert_eq!(probe.calls.get(), 0);
    }
}
