use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// The person an invoice is issued to. The email is printed as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(alias = "nombre")]
    pub name: String,

    #[serde(default)]
    pub email: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_request("Customer name cannot be empty"));
        }

        Ok(())
    }
}
