//! Domain records for the location directory.
//!
//! These are owned by whatever storage backs the directory; the search
//! engine only ever reads them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Stable location identity. Ascending order matches creation order.
pub type LocationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns `true` when both components are finite and inside the
    /// WGS84 bounds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub number: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub extension: Option<String>,
}

/// A service offered at exactly one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub languages: Vec<String>,
}

/// A searchable location in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: LocationId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub phones: Vec<Phone>,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub admin_emails: Vec<String>,
    pub organization: Organization,
    #[serde(default)]
    pub services: Vec<ServiceRecord>,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl LocationRecord {
    /// Category names reachable through this location's services, sorted
    /// and deduplicated.
    #[must_use]
    pub fn category_names(&self) -> BTreeSet<&str> {
        self.services
            .iter()
            .flat_map(|s| s.categories.iter())
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Language tags of the location and all of its services.
    pub fn all_languages(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(String::as_str).chain(
            self.services
                .iter()
                .flat_map(|s| s.languages.iter().map(String::as_str)),
        )
    }
}
