use std::collections::HashMap;

use axum::http::StatusCode;
use base64::{
    Engine as _, alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
};
use log::{debug, info, warn};
use serde::Serialize;

use crate::{
    errors::{DecodeFailure, ErrorBody},
    models::{InvocationRecord, ResponseRecord},
};

/// Standard alphabet with canonical padding. Unused bits in the last symbol
/// are ignored, so `aGVsbG9=` decodes like `aGVsbG8=`.
const DECODER: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

#[derive(Serialize)]
struct MessageBody {
    message: String,
}

/// Decodes the base64 `body` of the invocation and reports how many bytes it
/// carried. Failures never escape: they become a 400 record with no headers.
pub fn handle(invocation: &InvocationRecord) -> ResponseRecord {
    debug!(
        "Invocation carries {} metadata field(s)",
        invocation.metadata().count()
    );
    match decoded_size(invocation) {
        Ok(size) => {
            info!("File received, {size} bytes");
            let headers = HashMap::from([(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )]);
            let body = MessageBody {
                message: format!("File received successfully! Size: {size} bytes"),
            };
            ResponseRecord::json(StatusCode::OK, Some(headers), &body)
        }
        Err(e) => failure(&e),
    }
}

pub fn decoded_size(invocation: &InvocationRecord) -> Result<usize, DecodeFailure> {
    let encoded = invocation.body()?;
    Ok(DECODER.decode(encoded)?.len())
}

pub fn failure(e: &DecodeFailure) -> ResponseRecord {
    warn!("Rejecting invocation: {e}");
    ResponseRecord::json(StatusCode::BAD_REQUEST, None, &ErrorBody::new(e))
}
