use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use validator::{Validate, ValidationError, ValidationErrors};

/// JSON body extractor that also runs the `validator` rules of `T`.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let payload = json!({
                    "error": "Invalid JSON",
                    "message": rejection.body_text(),
                });
                (rejection.status(), Json(payload))
            })?;

        body.validate().map_err(|errors| {
            let payload = json!({
                "error": "Validation failed",
                "message": summarize(&errors),
                "details": details(&errors),
            });
            (StatusCode::BAD_REQUEST, Json(payload))
        })?;

        Ok(Self(body))
    }
}

fn describe(field: &str, error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    match error.code.as_ref() {
        "length" => "Invalid length".to_string(),
        "range" => "Value out of range".to_string(),
        "required" => "This field is required".to_string(),
        _ => format!("Invalid {field}"),
    }
}

fn summarize(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let messages: Vec<String> = fields
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors
                .iter()
                .map(move |e| format!("{field}: {}", describe(field, e)))
        })
        .collect();

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join("; ")
    }
}

fn details(errors: &ValidationErrors) -> Value {
    let mut map = Map::new();

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors.iter().map(|e| describe(&field, e)).collect();
        map.insert(field.to_string(), json!(messages));
    }

    Value::Object(map)
}
