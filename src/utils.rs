// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Utility functions for edgeup
//!
//! Pure helpers kept out of main.rs for testability.

use crate::commands::PASSWORD_ENV;
use crate::error::{ApiError, EdgeupError};

/// Format an error for the operator, with a recovery hint where one exists.
pub fn format_error(error: &EdgeupError) -> String {
    match error {
        EdgeupError::Api(ApiError::AuthenticationFailed) => format!(
            "{}\nCheck --username (or EDGEUP_USERNAME) and the {} environment variable.",
            error, PASSWORD_ENV
        ),
        EdgeupError::ProfileNotFound(name) => format!(
            "Operator profile not found: {}\nRun 'edgeup profiles' to see the profiles visible to this login.",
            name
        ),
        EdgeupError::EnterpriseNotFound(id) => format!(
            "Enterprise not found: {}\nCheck --enterprise against the portal.",
            id
        ),
        _ => format!("Error: {}", error),
    }
}
