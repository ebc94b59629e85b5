use crate::Error;
use crate::Result;
use bytes::Bytes;
use std::io::Write;

/// Raw byte access to one storage backend.
/// Keys are whatever the backend addresses objects by: file paths on disk,
/// object keys in a bucket.
pub trait Storage {
    fn fetch(&self, key: &str) -> Result<Bytes>;
    fn store(&self, key: &str, bytes: Vec<u8>) -> Result<()>;
}

/// The local filesystem.
pub struct Disk;

impl Storage for Disk {
    fn fetch(&self, key: &str) -> Result<Bytes> {
        std::fs::read(key)
            .map(Bytes::from)
            .map_err(|e| Error::NotFound {
                path: key.to_string(),
                reason: e.to_string(),
            })
    }
    /// Parent directories are created as needed. The bytes land in a
    /// sibling temp file first and are renamed over `key`, so an existing
    /// file is either fully replaced or left alone.
    fn store(&self, key: &str, bytes: Vec<u8>) -> Result<()> {
        let unwritable = |e: std::io::Error| Error::Write {
            path: key.to_string(),
            reason: e.to_string(),
        };
        let parent = std::path::Path::new(key)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(std::path::Path::new("."));
        std::fs::create_dir_all(parent).map_err(unwritable)?;
        let mut staged = tempfile::NamedTempFile::new_in(parent).map_err(unwritable)?;
        staged.write_all(&bytes).map_err(unwritable)?;
        staged.as_file().sync_all().map_err(unwritable)?;
        staged.persist(key).map(|_| ()).map_err(|e| unwritable(e.error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let err = Disk.fetch(&path.to_string_lossy()).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }
    #[test]
    fn store_creates_parents_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clean").join("lookup.csv");
        let ref key = path.to_string_lossy();
        Disk.store(key, b"first".to_vec()).unwrap();
        Disk.store(key, b"second".to_vec()).unwrap();
        assert_eq!(Disk.fetch(key).unwrap(), Bytes::from_static(b"second"));
    }
    #[test]
    fn failed_replace_keeps_existing_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let clean = dir.path().join("clean");
        let blocker = clean.join("lookup.csv");
        std::fs::create_dir_all(blocker.join("occupied")).unwrap();
        let err = Disk.store(&blocker.to_string_lossy(), b"rows".to_vec()).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
        assert!(blocker.join("occupied").is_dir());
        let entries = std::fs::read_dir(&clean).unwrap().count();
        assert_eq!(entries, 1);
    }
    #[test]
    fn store_leaves_only_the_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lookup.csv");
        Disk.store(&path.to_string_lossy(), b"rows".to_vec()).unwrap();
        let names = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect::<Vec<_>>();
        assert_eq!(names, ["lookup.csv"]);
    }
    #[test]
    fn directory_is_not_writable_as_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Disk.store(&dir.path().to_string_lossy(), Vec::new()).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }
}
