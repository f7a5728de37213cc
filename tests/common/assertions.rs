//! Custom assertion macros and utilities
//!
//! Provides assertions over the API's error responses.

/// Assert a response is an error with the given status and the standard
/// `{"detail", "status"}` body, and return the detail
#[macro_export]
macro_rules! assert_error_response {
    ($response:expr, $status:expr) => {{
        let response = &$response;
        assert_eq!(response.status_code(), $status);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], serde_json::json!($status.as_u16()));
        body["detail"]
            .as_str()
            .expect("error body has no detail")
            .to_string()
    }};
    ($response:expr, $status:expr, $detail:expr) => {{
        let detail = $crate::assert_error_response!($response, $status);
        assert_eq!(detail, $detail);
        detail
    }};
}

/// Assert a 401 response carries the bearer challenge
#[macro_export]
macro_rules! assert_unauthorized {
    ($response:expr) => {{
        let response = &$response;
        $crate::assert_error_response!(*response, axum::http::StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.header(axum::http::header::WWW_AUTHENTICATE),
            "Bearer",
            "missing WWW-Authenticate challenge"
        );
    }};
}
