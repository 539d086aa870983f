// src/models/dealer.rs
use serde::{Deserialize, Serialize};
use super::lenient_string;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Dealer {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub full_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub short_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub city: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub state: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub st: String,       // Two-letter state code
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub zip: String,
}

impl Dealer {
    /// Case-insensitive substring match on the full name or the city.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.full_name.to_lowercase().contains(&needle)
            || self.city.to_lowercase().contains(&needle)
    }

    /// Stable list key; falls back to name and address when the backend sent no id.
    pub fn key(&self) -> String {
        if self.id.is_empty() {
            format!("{}|{}|{}", self.full_name, self.address, self.zip)
        } else {
            self.id.clone()
        }
    }
}

/// Local search over an already fetched list. Never touches the network.
pub fn filter_dealers(dealers: &[Dealer], query: &str) -> Vec<Dealer> {
    dealers
        .iter()
        .filter(|dealer| dealer.matches(query))
        .cloned()
        .collect()
}

#[derive(Deserialize, Debug, Default)]
pub struct DealersResponse {
    #[serde(default)]
    pub dealers: Vec<Dealer>,
}

/// `dealer` is absent when the backend answers `{"status": 404, ...}`.
#[derive(Deserialize, Debug, Default)]
pub struct DealerResponse {
    #[serde(default)]
    pub dealer: Option<Dealer>,
}
