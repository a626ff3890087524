//! Error-body assertion helpers for backend testing
//!
//! The backend renders every rejection as a problem-details JSON body with a
//! stable `code`, a human-readable `message`, and a `recoverable` flag. The
//! helpers here assert that contract without depending on backend types.

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Local mirror of the backend's error body shape.
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorBodyLike {
    pub status: u16,
    pub code: String,
    pub message: String,
    pub recoverable: bool,
}

/// Assert that raw response parts conform to the stable error contract:
/// the HTTP status matches, the `code` matches, and the `recoverable`
/// classification matches.
pub fn assert_error_body(
    status: StatusCode,
    body: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
    expected_recoverable: bool,
) -> ErrorBodyLike {
    assert_eq!(
        status, expected_status,
        "unexpected HTTP status (body: {})",
        String::from_utf8_lossy(body)
    );

    let parsed: ErrorBodyLike =
        serde_json::from_slice(body).expect("error body should be valid problem-details JSON");

    assert_eq!(parsed.status, expected_status.as_u16());
    assert_eq!(parsed.code, expected_code);
    assert_eq!(
        parsed.recoverable, expected_recoverable,
        "recoverable flag mismatch for code {}",
        parsed.code
    );
    assert!(
        !parsed.message.is_empty(),
        "error body must carry a human-readable message"
    );

    parsed
}
