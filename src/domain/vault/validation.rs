use super::error::VaultError;
use super::types::{Password, Tag, Vault};
use std::collections::HashSet;

fn validate_not_empty(value: &str, error_msg: &str) -> Result<(), VaultError> {
    if value.trim().is_empty() {
        return Err(VaultError::invalid_record(error_msg));
    }
    Ok(())
}

pub fn validate_password(password: &Password) -> Result<(), VaultError> {
    validate_not_empty(&password.id, "Password id cannot be empty")?;
    validate_not_empty(&password.name, "Password name cannot be empty or whitespace only")?;
    if password.password.is_empty() {
        return Err(VaultError::invalid_record("Password secret cannot be empty"));
    }
    Ok(())
}

pub fn validate_tag(tag: &Tag) -> Result<(), VaultError> {
    validate_not_empty(&tag.id, "Tag id cannot be empty")?;
    validate_not_empty(&tag.name, "Tag name cannot be empty or whitespace only")
}

/// Checks every record and that ids are unique within each slice.
pub fn validate_vault(vault: &Vault) -> Result<(), VaultError> {
    let mut password_ids = HashSet::new();
    for password in &vault.passwords {
        validate_password(password)?;
        if !password_ids.insert(password.id.as_str()) {
            return Err(VaultError::duplicate_id(password.id.clone()));
        }
    }

    let mut tag_ids = HashSet::new();
    for tag in &vault.tags {
        validate_tag(tag)?;
        if !tag_ids.insert(tag.id.as_str()) {
            return Err(VaultError::duplicate_id(tag.id.clone()));
        }
    }
    Ok(())
}
