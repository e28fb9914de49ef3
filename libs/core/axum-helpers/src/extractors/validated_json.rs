//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// JSON extractor with automatic validation.
///
/// Deserializes the request body and validates it with the `validator`
/// crate's `Validate` trait. Both a malformed body and a failed validation
/// reject with a 400 and the standard error body.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateProject {
///     #[validate(length(min = 1, max = 100))]
///     name: String,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateProject>) -> String {
///     format!("Creating project: {}", payload.name)
/// }
///
/// let app = Router::new().route("/projects", post(create));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()).into_response())?;

        data.validate()
            .map_err(|e| AppError::BadRequest(describe_validation_errors(&e)).into_response())?;

        Ok(ValidatedJson(data))
    }
}

/// Flatten validator's nested error map into a single readable message.
fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, field_errors)| {
            let reasons: Vec<String> = field_errors
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            format!("{}: {}", field, reasons.join(", "))
        })
        .collect();
    parts.sort();

    format!("Validation failed: {}", parts.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_describe_validation_errors_uses_field_and_code() {
        let mut errors = ValidationErrors::new();
        errors.add("name", ValidationError::new("length"));

        let message = describe_validation_errors(&errors);
        assert_eq!(message, "Validation failed: name: length");
    }

    #[test]
    fn test_describe_validation_errors_prefers_message() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "name",
            ValidationError::new("length").with_message("must not be empty".into()),
        );

        let message = describe_validation_errors(&errors);
        assert!(message.contains("must not be empty"));
    }
}
