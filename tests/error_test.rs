use std::time::Duration;

use claimcheck::{ClaimCheckError, Result};

#[test]
fn test_error_display() {
    let err = ClaimCheckError::ModelNotFound("org/bert".to_string());
    assert!(err.to_string().contains("org/bert"));
}

#[test]
fn test_no_provider_names_the_service() {
    let err = ClaimCheckError::NoProvider("web search");
    assert!(err.to_string().contains("web search"));
}

#[test]
fn test_result_alias() {
    fn returns_error() -> Result<()> {
        Err(ClaimCheckError::EmptyClaim)
    }
    assert!(returns_error().is_err());
}

// ============================================================================
// Transport error classification
// ============================================================================

#[test]
fn transport_errors() {
    assert!(ClaimCheckError::Http("connection refused".into()).is_transport());
    assert!(ClaimCheckError::Timeout("deadline".into()).is_transport());
}

#[test]
fn service_errors_are_not_transport() {
    assert!(
        !ClaimCheckError::Api {
            status: 500,
            message: "internal".into()
        }
        .is_transport()
    );
    assert!(!ClaimCheckError::RateLimited { retry_after: None }.is_transport());
    assert!(!ClaimCheckError::AuthenticationFailed.is_transport());
    assert!(!ClaimCheckError::DataError("bad json".into()).is_transport());
}

#[test]
fn status_codes() {
    assert_eq!(
        ClaimCheckError::Api {
            status: 403,
            message: "forbidden".into()
        }
        .status(),
        Some(403)
    );
    assert_eq!(
        ClaimCheckError::RateLimited {
            retry_after: Some(Duration::from_secs(5))
        }
        .status(),
        Some(429)
    );
    assert_eq!(ClaimCheckError::AuthenticationFailed.status(), Some(401));
    assert_eq!(ClaimCheckError::Http("reset".into()).status(), None);
    assert_eq!(ClaimCheckError::EmptyClaim.status(), None);
    assert_eq!(ClaimCheckError::DataError("bad body".into()).status(), None);
}

#[test]
fn json_errors_convert() {
    let err: ClaimCheckError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert!(matches!(err, ClaimCheckError::Json(_)));
}
