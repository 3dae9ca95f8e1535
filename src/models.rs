use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ApiError;

/// A record in the `items` collection.
///
/// The store-assigned `_id` is ignored on read and never written. The
/// collection has no schema, so a missing or null field reads as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Item {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Form body for POST /insert
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct InsertForm {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Form body for POST /delete
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct DeleteForm {
    pub name: Option<String>,
}

/// Form body for POST /update
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateForm {
    pub name: Option<String>,
    #[serde(rename = "newName")]
    pub new_name: Option<String>,
    #[serde(rename = "newDescription")]
    pub new_description: Option<String>,
}

/// Query parameters for GET /search
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Exact name to match
    pub name: Option<String>,
}

/// Unwrap a submitted field, rejecting the request when it was not sent.
///
/// An empty value counts as present.
pub fn require(field: &'static str, value: Option<String>) -> Result<String, ApiError> {
    value.ok_or(ApiError::MissingField(field))
}
