//! Turns PayPal HTTP responses into wire mappings or [`PayPalError`]s.
//!
//! Every failure is logged exactly once, here, together with the request payload.

use reqwest::blocking::RequestBuilder;
use serde_json::Value;

use crate::connectors::errors::{ApiError, PayPalError};
use crate::connectors::paypal::mapper::WireMap;

fn payload_for_log(payload: Option<&Value>) -> String {
    payload.map(Value::to_string).unwrap_or_default()
}

fn transport_failure(err: reqwest::Error, payload: Option<&Value>) -> PayPalError {
    tracing::error!(payload = %payload_for_log(payload), "{}", err);
    PayPalError::Transport(err)
}

/// Send the request and decode the JSON object PayPal answers with.
pub(crate) fn read_response(
    request: RequestBuilder,
    payload: Option<&Value>,
) -> Result<WireMap, PayPalError> {
    let response = request
        .send()
        .map_err(|err| transport_failure(err, payload))?;

    let status = response.status();
    let url = response.url().to_string();
    let body = response
        .text()
        .map_err(|err| transport_failure(err, payload))?;

    if !status.is_success() {
        let error = ApiError::from_response(status.as_u16(), &body);
        tracing::error!(
            status = status.as_u16(),
            url = %url,
            error = %body,
            payload = %payload_for_log(payload),
            "PayPal request to {} failed with {}: {}",
            url,
            status,
            error.message
        );
        return Err(PayPalError::Api(error));
    }

    decode_json_response(&body).map_err(|err| {
        tracing::error!(url = %url, body = %body, payload = %payload_for_log(payload), "{}", err);
        err
    })
}

/// Empty bodies (`204 No Content`) decode to an empty mapping.
pub(crate) fn decode_json_response(body: &str) -> Result<WireMap, PayPalError> {
    if body.trim().is_empty() {
        return Ok(WireMap::new());
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(wire)) => Ok(wire),
        Ok(other) => Err(PayPalError::InvalidResponse(format!(
            "expected a JSON object, got {}",
            other
        ))),
        Err(err) => Err(PayPalError::InvalidResponse(format!(
            "response is not valid JSON: {}",
            err
        ))),
    }
}
