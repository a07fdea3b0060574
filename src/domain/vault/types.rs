use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use zeroize::Zeroize;

/// A stored credential. Only ever replaced as a whole, keyed by `id`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Password {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(
        default,
        deserialize_with = "non_empty_string",
        skip_serializing_if = "is_blank"
    )]
    pub tag_id: Option<String>,
}

impl Password {
    /// Creates a record with a freshly generated id.
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), name, password)
    }

    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: None,
            username: None,
            email: None,
            password: password.into(),
            notes: None,
            tag_id: None,
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// An empty tag id leaves the record untagged.
    pub fn tag(mut self, tag_id: impl Into<String>) -> Self {
        self.tag_id = Some(tag_id.into());
        self.normalized()
    }

    /// Collapses an empty `tag_id` to `None`, the only untagged form that
    /// survives storage.
    pub fn normalized(mut self) -> Self {
        if is_blank(&self.tag_id) {
            self.tag_id = None;
        }
        self
    }

    pub fn is_untagged(&self) -> bool {
        self.tag_id.is_none()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("url", &self.url)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("notes", &self.notes)
            .field("tag_id", &self.tag_id)
            .finish()
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
        }
    }

    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub enable_local_authentication: bool,
}

/// The durable slices: everything that survives a restart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vault {
    #[serde(default)]
    pub passwords: Vec<Password>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub settings: Settings,
}

impl Vault {
    /// No passwords and no tags.
    pub fn is_empty(&self) -> bool {
        self.passwords.is_empty() && self.tags.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn danger(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: ToastKind::Danger,
        }
    }
}

/// Full application state. `toasts` is transient and never reaches storage.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub vault: Vault,
    pub toasts: Vec<Toast>,
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_new_generates_unique_ids() {
        let a = Password::new("mail", "secret");
        let b = Password::new("mail", "secret");
        assert_ne!(a.id, b.id);
        assert!(a.is_untagged());
    }

    #[test]
    fn test_password_debug_redacts_secret() {
        let password = Password::with_id("1", "bank", "hunter2");
        let rendered = format!("{password:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_password_uses_camel_case_tag_id() {
        let password = Password::with_id("1", "bank", "pw").tag("t1");
        let json = serde_json::to_string(&password).unwrap();
        assert!(json.contains("\"tagId\":\"t1\""));
        assert!(!json.contains("notes"));
    }

    #[test]
    fn test_empty_tag_id_reads_as_untagged() {
        let json = r#"{"id":"1","name":"bank","password":"pw","tagId":""}"#;
        let password: Password = serde_json::from_str(json).unwrap();
        assert!(password.is_untagged());
    }

    #[test]
    fn test_empty_tag_builds_untagged_password() {
        let password = Password::with_id("1", "bank", "pw").tag("");
        assert!(password.is_untagged());
    }

    #[test]
    fn test_empty_tag_id_is_never_written() {
        let mut password = Password::with_id("1", "bank", "pw");
        password.tag_id = Some(String::new());

        let json = serde_json::to_string(&password).unwrap();
        assert!(!json.contains("tagId"));
        assert!(password.normalized().is_untagged());
    }

    #[test]
    fn test_null_optionals_are_accepted() {
        let json = r#"{"id":"1","name":"bank","password":"pw","url":null,"tagId":null}"#;
        let password: Password = serde_json::from_str(json).unwrap();
        assert_eq!(password.url, None);
        assert_eq!(password.tag_id, None);
    }

    #[test]
    fn test_settings_default_disables_local_authentication() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert!(!settings.enable_local_authentication);
    }
}
