//! Wire DTOs for the whiteboard REST backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON (`_id`, `createdAt`, ...) through
//! serde renames so the rest of the client works with plain Rust names.
//! Decoding is lenient where the backend is loose: missing timestamps become
//! empty strings and an unpopulated `owner` reference decodes as "no email".

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Label shown when a canvas has no owner email.
pub const UNKNOWN_OWNER: &str = "Unknown";

/// The signed-in user as returned by `GET /api/users/profile`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name used in the greeting.
    #[serde(default)]
    pub name: String,
    /// Account email, if the backend includes it.
    #[serde(default)]
    pub email: Option<String>,
    /// Any further profile fields, kept verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Envelope around the profile payload: `{ "user": { ... } }`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProfileEnvelope {
    pub user: UserProfile,
}

/// A canvas summary from `GET /api/canvas`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Canvas {
    /// Backend document id.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Display name chosen at creation.
    #[serde(default)]
    pub name: String,
    /// Creation timestamp (ISO 8601).
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    /// Last modification timestamp (ISO 8601).
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
    /// Owning user, when the backend populates the reference.
    #[serde(default, deserialize_with = "deserialize_owner")]
    pub owner: Option<CanvasOwner>,
}

impl Canvas {
    /// Owner email for display, or [`UNKNOWN_OWNER`].
    pub fn owner_label(&self) -> &str {
        self.owner
            .as_ref()
            .and_then(|owner| owner.email.as_deref())
            .filter(|email| !email.is_empty())
            .unwrap_or(UNKNOWN_OWNER)
    }
}

/// Populated owner reference on a canvas.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanvasOwner {
    #[serde(default)]
    pub email: Option<String>,
}

/// Body of `POST /api/canvas`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateCanvasRequest<'a> {
    pub name: &'a str,
}

/// Body of `PUT /api/canvas/share/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShareCanvasRequest<'a> {
    pub shared_with: &'a str,
}

/// Error body shape used by the backend: `{ "message": "..." }`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Accept a populated owner object, a bare owner id string, or `null`.
fn deserialize_owner<'de, D>(deserializer: D) -> Result<Option<CanvasOwner>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(_) => Ok(Some(CanvasOwner::default())),
        serde_json::Value::Object(_) => serde_json::from_value(value).map(Some).map_err(D::Error::custom),
        _ => Err(D::Error::custom("expected owner object, id string or null")),
    }
}
