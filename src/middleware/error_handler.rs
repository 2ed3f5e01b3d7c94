use actix_web::{error::JsonPayloadError, HttpRequest};

use crate::core::AppError;

/// Turns body extraction failures into the standard error envelope.
///
/// Wire into `web::JsonConfig::default().error_handler(json_error_handler)`.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected request body");

    AppError::invalid_request(describe(&err)).into()
}

fn describe(err: &JsonPayloadError) -> String {
    match err {
        JsonPayloadError::ContentType => "Expected a JSON body (Content-Type: application/json)".to_string(),
        JsonPayloadError::Deserialize(e) => format!("Malformed JSON body: {}", e),
        other => other.to_string(),
    }
}
