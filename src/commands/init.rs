// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Init command
//!
//! Writes a settings file skeleton under the edgeup home directory.

use crate::config::Settings;
use crate::error::Result;

use super::PASSWORD_ENV;

/// Execute the init command
pub fn execute() -> Result<()> {
    let path = Settings::default_path();
    if path.exists() {
        println!("Settings already exist at {}", path.display());
        return Ok(());
    }

    Settings::default().save()?;
    println!("Wrote {}", path.display());
    println!("Fill in portal.host, portal.username and portal.enterprise_id,");
    println!("and export {} before running upgrades.", PASSWORD_ENV);

    Ok(())
}
