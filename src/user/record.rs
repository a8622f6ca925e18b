//! User record and codecs
//!
//! One record per distinct email address. The same value has three
//! representations: wire JSON (camelCase field names), this in-memory
//! struct, and the store's attribute map. The conversions here are pure
//! transforms with no side effects.

use serde::{Deserialize, Serialize};

use crate::store::{map_from_json, map_into_json, AttributeMap};

use super::errors::{UserError, UserResult};

/// Name of the attribute holding the natural key.
pub const KEY_ATTRIBUTE: &str = "email";

/// A user record.
///
/// `email` is the natural key and immutable once a record exists. The name
/// fields are optional on the wire and default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub email: String,

    #[serde(default, rename = "firstName")]
    pub first_name: String,

    #[serde(default, rename = "lastName")]
    pub last_name: String,
}

impl User {
    /// Parse a record from wire JSON.
    pub fn decode(body: &str) -> UserResult<Self> {
        serde_json::from_str(body).map_err(|_| UserError::InvalidPayload)
    }

    /// Convert into the store's attribute representation.
    pub fn to_attributes(&self) -> UserResult<AttributeMap> {
        let value = serde_json::to_value(self).map_err(|_| UserError::EncodeFailed)?;
        map_from_json(value).map_err(|_| UserError::EncodeFailed)
    }

    /// Rebuild a record from a stored item.
    pub fn from_attributes(item: AttributeMap) -> UserResult<Self> {
        let value = map_into_json(item).map_err(|_| UserError::DecodeFailed)?;
        serde_json::from_value(value).map_err(|_| UserError::DecodeFailed)
    }

    /// Rebuild every record in a scan result.
    pub fn from_attributes_list(items: Vec<AttributeMap>) -> UserResult<Vec<Self>> {
        items.into_iter().map(Self::from_attributes).collect()
    }
}
