use super::Record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: i32,
    pub name: String,

    #[serde(rename = "countryId")]
    pub country_id: i32,
}

impl City {
    pub fn new(id: i32, name: impl Into<String>, country_id: i32) -> Self {
        Self {
            id,
            name: name.into(),
            country_id,
        }
    }

    pub fn belongs_to(&self, country_id: i32) -> bool {
        self.country_id == country_id
    }
}

impl Record for City {
    fn id(&self) -> i32 {
        self.id
    }
}
