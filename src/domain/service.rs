//! Service (catalog entry) domain entity and request DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Service domain entity, a billable catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Assigned by the repository on first save
    pub id: Option<i32>,
    pub name: String,
    /// Short code, unique across the catalog
    pub code: String,
    /// Suggested unit price when a contract does not override it
    pub default_price: Option<f64>,
}

impl Service {
    /// Create a not-yet-persisted service
    pub fn new(name: String, code: String, default_price: Option<f64>) -> Self {
        Self {
            id: None,
            name,
            code,
            default_price,
        }
    }
}

/// Service creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateService {
    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    #[schema(example = "Payroll processing")]
    pub name: String,
    #[validate(length(min = 2, message = "Code must be at least 2 characters"))]
    #[schema(example = "PAY")]
    pub code: String,
    #[validate(range(exclusive_min = 0.0, message = "Default price must be positive"))]
    pub default_price: Option<f64>,
}

/// Service partial-update payload; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "at_least_one_service_field"))]
pub struct UpdateService {
    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 2, message = "Code must be at least 2 characters"))]
    pub code: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "Default price must be positive"))]
    pub default_price: Option<f64>,
}

fn at_least_one_service_field(update: &UpdateService) -> Result<(), ValidationError> {
    if update.name.is_none() && update.code.is_none() && update.default_price.is_none() {
        let mut err = ValidationError::new("at_least_one_field");
        err.message = Some("At least one field must be provided for update.".into());
        return Err(err);
    }
    Ok(())
}
