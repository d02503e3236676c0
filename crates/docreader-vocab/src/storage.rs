use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::StorageError;

/// Durable slot holding the serialized vocabulary collection.
///
/// The slot is read in full at load and rewritten in full on every
/// mutation; last writer wins.
pub trait VocabularyStorage: Send + Sync {
    /// Read the full slot, `None` when nothing has been saved yet
    fn load(&self) -> Result<Option<Vec<u8>>, StorageError>;

    /// Rewrite the full slot
    fn save(&self, bytes: &[u8]) -> Result<(), StorageError>;

    /// Remove the slot entirely
    fn clear(&self) -> Result<(), StorageError>;
}

impl<T: VocabularyStorage> VocabularyStorage for std::sync::Arc<T> {
    fn load(&self) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).load()
    }

    fn save(&self, bytes: &[u8]) -> Result<(), StorageError> {
        (**self).save(bytes)
    }

    fn clear(&self) -> Result<(), StorageError> {
        (**self).clear()
    }
}

/// File-backed slot
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VocabularyStorage for FileStorage {
    fn load(&self) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn save(&self, bytes: &[u8]) -> Result<(), StorageError> {
        fs::write(&self.path, bytes)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}

/// In-memory slot for tests
#[derive(Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-seeded bytes, e.g. a corrupt payload
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        Self {
            slot: Mutex::new(Some(bytes)),
        }
    }
}

impl VocabularyStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<u8>>, StorageError> {
        let slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        Ok(slot.clone())
    }

    fn save(&self, bytes: &[u8]) -> Result<(), StorageError> {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(bytes.to_vec());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        *slot = None;
        Ok(())
    }
}
