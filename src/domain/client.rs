//! Client domain entity and request DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::deserialize_some;

/// Client domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Assigned by the repository on first save
    pub id: Option<i32>,
    /// Optional internal numeric code, unique when present
    pub code: Option<i32>,
    pub nickname: String,
    pub company_name: String,
    /// Brazilian company tax id, 14 digits unformatted
    pub cnpj: String,
}

impl Client {
    /// Create a not-yet-persisted client
    pub fn new(code: Option<i32>, nickname: String, company_name: String, cnpj: String) -> Self {
        Self {
            id: None,
            code,
            nickname,
            company_name,
            cnpj,
        }
    }
}

/// Client registration payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClient {
    /// Optional internal numeric code
    pub code: Option<i32>,
    #[validate(length(min = 1, message = "Nickname is required"))]
    #[schema(example = "Acme")]
    pub nickname: String,
    #[validate(length(min = 1, message = "Company name is required"))]
    #[schema(example = "Acme Ltda")]
    pub company_name: String,
    #[validate(length(equal = 14, message = "CNPJ must be exactly 14 characters"))]
    #[schema(example = "12345678901234")]
    pub cnpj: String,
}

/// Client partial-update payload. Absent fields are left unchanged;
/// `"code": null` clears the code.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "at_least_one_client_field"))]
pub struct UpdateClient {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub code: Option<Option<i32>>,
    #[validate(length(min = 1, message = "Nickname must not be empty"))]
    pub nickname: Option<String>,
    #[validate(length(min = 1, message = "Company name must not be empty"))]
    pub company_name: Option<String>,
    #[validate(length(equal = 14, message = "CNPJ must be exactly 14 characters"))]
    pub cnpj: Option<String>,
}

fn at_least_one_client_field(update: &UpdateClient) -> Result<(), ValidationError> {
    if update.code.is_none()
        && update.nickname.is_none()
        && update.company_name.is_none()
        && update.cnpj.is_none()
    {
        let mut err = ValidationError::new("at_least_one_field");
        err.message = Some("At least one field must be provided for update.".into());
        return Err(err);
    }
    Ok(())
}
