// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Persistable entity contract.

/// An entity persisted under a string identifier.
///
/// The identifier is `None` until the entity has been stored once. Stores
/// assign a 24-character hexadecimal ObjectId (see [`new_object_id`]).
///
/// Usually implemented with `#[derive(BaseEntity)]`:
///
/// ```rust,ignore
/// #[derive(BaseEntity, Clone, Serialize, Deserialize)]
/// pub struct Note {
///     #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
///     pub id: Option<String>,
///     pub title: String
/// }
/// ```
pub trait BaseEntity: Send + Sync + 'static {
    /// Name of the document collection holding this entity.
    const COLLECTION: &'static str;

    /// Current identifier, if the entity has one.
    fn id(&self) -> Option<&str>;

    /// Replace the identifier.
    fn set_id(&mut self, id: String);
}

/// Generate a fresh ObjectId in its 24-character hex form.
///
/// ```rust
/// let id = exposed_model_core::new_object_id();
/// assert_eq!(id.len(), 24);
/// assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn new_object_id() -> String {
    bson::oid::ObjectId::new().to_hex()
}
