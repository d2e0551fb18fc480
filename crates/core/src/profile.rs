use serde_json::{Map, Value};

use crate::json_utils::field_text;

/// Profile fields submitted by the landing page after Facebook login.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePayload {
    pub facebook_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    /// Stored verbatim; defaults to `[]` when the client omits it.
    pub likes: Value,
}

impl ProfilePayload {
    /// Extract profile fields from a decoded request object.
    ///
    /// Every field is optional. A numeric `id` is kept as its decimal text.
    #[must_use]
    pub fn from_object(body: &Map<String, Value>) -> Self {
        Self {
            facebook_id: field_text(body, "id"),
            name: field_text(body, "name"),
            email: field_text(body, "email"),
            likes: body.get("likes").cloned().unwrap_or_else(|| Value::Array(Vec::new())),
        }
    }
}
