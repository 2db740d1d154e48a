//! Service schema - Catalogue entries offered by the business

use serde::{Deserialize, Serialize};

use super::wire::{null_as_empty, ServiceId};

/// A service from `GET /services`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ServiceId>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Service {
    pub fn new(id: impl Into<ServiceId>, name: impl Into<String>) -> Self {
        Service {
            id: Some(id.into()),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Id in its string form, empty when the backend sent none
    pub fn id_string(&self) -> String {
        self.id.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    /// Whether `key` names this service by id or, case-insensitively, by name
    pub fn matches(&self, key: &str) -> bool {
        let key = key.trim();
        self.id.as_ref().is_some_and(|id| id.matches(key)) || self.name.trim().eq_ignore_ascii_case(key)
    }
}

/// Partial update for `PUT /services/{id}`; unset fields are left alone
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ServiceUpdate {
    pub fn is_empty(&self) -> bool {
        self == &ServiceUpdate::default()
    }
}
