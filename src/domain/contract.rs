//! Contract domain entity, status enumeration and request DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::deserialize_some;

/// Contract lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContractStatus {
    Active,
    Inactive,
    Pending,
}

impl ContractStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::Active => "ACTIVE",
            ContractStatus::Inactive => "INACTIVE",
            ContractStatus::Pending => "PENDING",
        }
    }
}

impl From<&str> for ContractStatus {
    fn from(s: &str) -> Self {
        match s {
            "ACTIVE" => ContractStatus::Active,
            "INACTIVE" => ContractStatus::Inactive,
            _ => ContractStatus::Pending,
        }
    }
}

impl std::fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contract domain entity, linking a client to a contracted service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// Assigned by the repository on first save
    pub id: Option<i32>,
    /// Business contract code, unique
    pub contract_code: String,
    pub client_id: i32,
    pub service_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: ContractStatus,
    pub observation: Option<String>,
}

impl Contract {
    /// Monthly billed value for this contract
    pub fn monthly_value(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// Contract creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContract {
    #[validate(length(min = 1, message = "Contract code is required"))]
    #[schema(example = "CT-2024-001")]
    pub contract_code: String,
    pub client_id: i32,
    pub service_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
    /// Accepts an ISO date string ("2023-01-01")
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: ContractStatus,
    pub observation: Option<String>,
}

/// Contract partial-update payload. Absent fields are left unchanged;
/// `endDate`/`observation` may be set to null to clear them.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContract {
    #[validate(length(min = 1, message = "Contract code must not be empty"))]
    pub contract_code: Option<String>,
    pub client_id: Option<i32>,
    pub service_id: Option<i32>,
    pub quantity: Option<i32>,
    pub unit_price: Option<f64>,
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub end_date: Option<Option<NaiveDate>>,
    pub status: Option<ContractStatus>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub observation: Option<Option<String>>,
}
