use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Postal address; flattened into columns on `hotel` and `customer`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub country: String,
}

impl Address {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.city.trim().is_empty() {
            return Err(ModelError::Validation("address.city required".into()));
        }
        if self.country.trim().is_empty() {
            return Err(ModelError::Validation("address.country required".into()));
        }
        Ok(())
    }
}
