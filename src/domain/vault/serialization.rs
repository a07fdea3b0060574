use super::error::BackupError;
use super::types::{Password, Settings, Tag, Vault};
use super::validation::{validate_password, validate_tag};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

pub const BACKUP_FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct BackupEnvelope<'a> {
    version: u32,
    passwords: &'a [Password],
    tags: &'a [Tag],
    settings: &'a Settings,
}

/// Candidate records read from a backup. Never applied directly to a store.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportedPasswords {
    pub passwords: Vec<Password>,
    pub tags: Vec<Tag>,
}

impl ImportedPasswords {
    pub fn is_empty(&self) -> bool {
        self.passwords.is_empty() && self.tags.is_empty()
    }
}

pub fn encode_backup(vault: &Vault) -> Result<Vec<u8>, BackupError> {
    let envelope = BackupEnvelope {
        version: BACKUP_FORMAT_VERSION,
        passwords: &vault.passwords,
        tags: &vault.tags,
        settings: &vault.settings,
    };

    serde_json::to_vec(&envelope)
        .map_err(|_| BackupError::malformed("Failed to serialize vault for export"))
}

pub fn decode_backup(bytes: &[u8]) -> Result<ImportedPasswords, BackupError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| BackupError::malformed("Backup is not valid UTF-8"))?;

    let root: Value = serde_json::from_str(text)
        .map_err(|e| BackupError::malformed(format!("Backup is not valid JSON: {e}")))?;

    let object = root
        .as_object()
        .ok_or_else(|| BackupError::malformed("Backup root must be an object"))?;

    let passwords: Vec<Password> = decode_slice(object, "passwords")?;
    for password in &passwords {
        validate_password(password).map_err(|e| BackupError::malformed(e.to_string()))?;
    }

    let tags: Vec<Tag> = decode_slice(object, "tags")?;
    for tag in &tags {
        validate_tag(tag).map_err(|e| BackupError::malformed(e.to_string()))?;
    }

    Ok(ImportedPasswords { passwords, tags })
}

/// Reads an array-valued field. Older exports store every slice as a JSON
/// string holding the array, so both shapes are accepted.
fn decode_slice<T: DeserializeOwned>(
    object: &Map<String, Value>,
    field: &str,
) -> Result<Vec<T>, BackupError> {
    let value = match object.get(field) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::String(encoded)) => serde_json::from_str::<Value>(encoded)
            .map_err(|_| BackupError::malformed(format!("Field '{field}' is not valid JSON")))?,
        Some(other) => other.clone(),
    };

    if !value.is_array() {
        return Err(BackupError::malformed(format!(
            "Field '{field}' must be an array"
        )));
    }

    serde_json::from_value(value)
        .map_err(|e| BackupError::malformed(format!("Invalid record in '{field}': {e}")))
}

/// Hex SHA-256 of a payload, used to identify a backup in logs and reports.
pub fn backup_fingerprint(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
