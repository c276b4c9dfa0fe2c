// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::io;

use edgeup::error::{ApiError, EdgeupError};

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let edgeup_error: EdgeupError = io_error.into();

    match edgeup_error {
        EdgeupError::Io(_) => {} // Expected
        _ => panic!("Expected Io error, got different error type"),
    }
}

#[test]
fn test_config_error_display() {
    let error = EdgeupError::Config("no edge names requested".to_string());
    assert_eq!(
        error.to_string(),
        "Configuration error: no edge names requested"
    );
}

#[test]
fn test_profile_not_found_display() {
    let error = EdgeupError::ProfileNotFound("R332P1".to_string());
    assert_eq!(error.to_string(), "Operator profile not found: R332P1");
}

#[test]
fn test_unsupported_profile_display() {
    let error = EdgeupError::UnsupportedProfile {
        name: "Net332".to_string(),
        kind: "NETWORK_BASED".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Operator profile 'Net332' is NETWORK_BASED; only DEVICE_BASED profiles can be rolled out per edge"
    );
}

#[test]
fn test_enterprise_not_found_display() {
    let error = EdgeupError::EnterpriseNotFound(99);
    assert_eq!(error.to_string(), "Enterprise not found: 99");
}

#[test]
fn test_cancelled_display() {
    let error = EdgeupError::Cancelled("hub upgrades declined".to_string());
    assert_eq!(error.to_string(), "Cancelled: hub upgrades declined");
}

#[test]
fn test_api_authentication_error() {
    let error = ApiError::AuthenticationFailed;
    assert_eq!(
        error.to_string(),
        "Authentication failed: the portal rejected the credentials"
    );
}

#[test]
fn test_api_server_error() {
    let error = ApiError::ServerError {
        status: 500,
        message: "internal server error".to_string(),
    };
    assert_eq!(error.to_string(), "Portal error (500): internal server error");
}

#[test]
fn test_api_rpc_error() {
    let error = ApiError::Rpc {
        code: -32000,
        message: "enterprise not found".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Portal RPC error (-32000): enterprise not found"
    );
}

#[test]
fn test_api_error_to_edgeup_error_conversion() {
    let api_error = ApiError::AuthenticationFailed;
    let edgeup_error: EdgeupError = api_error.into();

    match edgeup_error {
        EdgeupError::Api(ApiError::AuthenticationFailed) => {} // Expected
        _ => panic!("Expected Api(AuthenticationFailed) error"),
    }
}

#[test]
fn test_invalid_response_display() {
    let error = ApiError::InvalidResponse("missing result".to_string());
    assert!(error.to_string().contains("Invalid portal response"));
}
