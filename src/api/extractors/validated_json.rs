//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// JSON extractor that rejects payloads failing schema validation.
///
/// Both deserialization failures (wrong shape or type) and `validator` rule
/// failures surface as a 400 "Validation failed" response with the
/// individual messages under `details`, before the handler body runs.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(vec![e.body_text()]))?;

        value
            .validate()
            .map_err(|e| AppError::validation(collect_validation_messages(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Flatten validator errors into one message per failed rule
fn collect_validation_messages(errors: &validator::ValidationErrors) -> Vec<String> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn messages_fall_back_to_the_field_name() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("cnpj", ValidationError::new("length"));
        let messages = collect_validation_messages(&errors);
        assert_eq!(messages, vec!["cnpj is invalid".to_string()]);
    }
}
