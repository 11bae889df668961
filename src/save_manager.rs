use crate::core::battle_state::BattleState;
use crate::core::constants::SAVE_VERSION_MAGIC;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

const HEADER_LEN: u64 = 12;
const CHECKSUM_LEN: u64 = 32;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid save version: expected 0x{expected:016X}, got 0x{found:016X}")]
    InvalidMagic { expected: u64, found: u64 },

    #[error("Checksum verification failed")]
    ChecksumMismatch,

    #[error("Battle state could not be encoded or decoded: {0}")]
    Codec(#[from] bincode::Error),
}

/// Saves and loads a battle with a checksummed binary format, so a host can
/// resolve one turn per invocation.
pub struct BattleSaveManager {
    save_path: PathBuf,
}

impl BattleSaveManager {
    pub fn new(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    /// Saves the battle state to disk with checksum verification
    ///
    /// File format:
    /// - Version magic (8 bytes)
    /// - Data length (4 bytes)
    /// - Serialized battle state (variable length)
    /// - SHA256 checksum (32 bytes)
    pub fn save(&self, state: &BattleState) -> Result<(), SaveError> {
        let data = bincode::serialize(state)?;
        let data_len = data.len() as u32;

        // Compute checksum over version + length + data
        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        if let Some(parent) = self.save_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;

        Ok(())
    }

    /// Loads the battle state from disk with checksum verification
    ///
    /// Returns an error if:
    /// - The file doesn't exist
    /// - The version magic is incorrect
    /// - The checksum verification fails
    /// - The data cannot be deserialized
    pub fn load(&self) -> Result<BattleState, SaveError> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);

        if version != SAVE_VERSION_MAGIC {
            return Err(SaveError::InvalidMagic {
                expected: SAVE_VERSION_MAGIC,
                found: version,
            });
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        // Header (12) + payload + checksum (32) must fit in the file
        let file_len = file.metadata()?.len();
        if HEADER_LEN + data_len as u64 + CHECKSUM_LEN > file_len {
            return Err(SaveError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Save header claims {} payload bytes but file is {} bytes",
                    data_len, file_len
                ),
            )));
        }

        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; CHECKSUM_LEN as usize];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&data);
        let computed_checksum = hasher.finalize();

        if stored_checksum != computed_checksum.as_slice() {
            return Err(SaveError::ChecksumMismatch);
        }

        Ok(bincode::deserialize(&data)?)
    }

    /// Checks if a save file exists
    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::battle_engine::BattleEngine;
    use crate::core::randomness::FixedZeroRandomness;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let manager = BattleSaveManager::new(dir.path().join("battle.dat"));

        let mut engine = BattleEngine::new(FixedZeroRandomness);
        engine.resolve_turn().unwrap();
        engine.resolve_turn().unwrap();
        let original = engine.into_state();

        manager.save(&original).unwrap();
        assert!(manager.save_exists());

        let loaded = manager.load().unwrap();
        assert_eq!(loaded, original);
        assert_eq!(loaded.turn_number, 2);
    }

    #[test]
    fn test_load_nonexistent() {
        let dir = tempfile::tempdir().unwrap();
        let manager = BattleSaveManager::new(dir.path().join("missing.dat"));

        let result = manager.load();
        match result {
            Err(SaveError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::NotFound),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_corrupted_payload_fails_checksum() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("battle.dat");
        let manager = BattleSaveManager::new(&path);
        manager
            .save(&BattleEngine::new(FixedZeroRandomness).into_state())
            .unwrap();

        let mut bytes = fs::read(&path).unwrap();
        bytes[12] ^= 0xFF; // first payload byte
        fs::write(&path, bytes).unwrap();

        assert!(matches!(manager.load(), Err(SaveError::ChecksumMismatch)));
    }

    #[test]
    fn test_wrong_magic_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("battle.dat");
        fs::write(&path, [0u8; 64]).unwrap();

        let manager = BattleSaveManager::new(&path);
        assert!(matches!(
            manager.load(),
            Err(SaveError::InvalidMagic { found: 0, .. })
        ));
    }

    #[test]
    fn test_oversized_length_header_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("battle.dat");
        let mut bytes = SAVE_VERSION_MAGIC.to_le_bytes().to_vec();
        bytes.extend_from_slice(&u32::MAX.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 40]);
        fs::write(&path, bytes).unwrap();

        let manager = BattleSaveManager::new(&path);
        match manager.load() {
            Err(SaveError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::InvalidData),
            other => panic!("expected InvalidData, got {:?}", other),
        }
    }

    #[test]
    fn test_truncated_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("battle.dat");
        let manager = BattleSaveManager::new(&path);
        manager
            .save(&BattleEngine::new(FixedZeroRandomness).into_state())
            .unwrap();

        let bytes = fs::read(&path).unwrap();
        fs::write(&path, &bytes[..bytes.len() - 1]).unwrap();

        assert!(matches!(manager.load(), Err(SaveError::Io(_))));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let manager = BattleSaveManager::new(dir.path().join("nested/deeper/battle.dat"));
        manager
            .save(&BattleEngine::new(FixedZeroRandomness).into_state())
            .unwrap();
        assert!(manager.save_exists());
    }
}
