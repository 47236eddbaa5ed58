use crate::error::SessionError;
use crate::flow::FlowDefinition;
use crate::provenance::ConfigProvenance;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// Everything needed to resume an editing session, including the provenance record the
/// flow document does not carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSession {
    pub flow: FlowDefinition,
    pub provenance: ConfigProvenance,
    pub next_sequence: u64,
}

impl EditorSession {
    /// Saves the session to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), SessionError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|source| SessionError::Io {
            path: path.to_string(),
            source,
        })?;
        file.write_all(&bytes).map_err(|source| SessionError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(())
    }

    /// Loads a session from a file.
    pub fn from_file(path: &str) -> Result<Self, SessionError> {
        let mut file = fs::File::open(path).map_err(|source| SessionError::Io {
            path: path.to_string(),
            source,
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|source| SessionError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SessionError> {
        encode_to_vec(self, standard()).map_err(|e| SessionError::Encode(e.to_string()))
    }

    /// Deserializes a session from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SessionError> {
        decode_from_slice(bytes, standard())
            .map(|(session, _)| session)
            .map_err(|e| SessionError::Decode(e.to_string()))
    }
}
