// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI subcommand implementations
//!
//! Each submodule handles one subcommand. Shared here: merging CLI flags
//! with the settings file (flags win) and establishing a portal session.

pub mod edges;
pub mod init;
pub mod profiles;
pub mod upgrade;

use crate::cli::Cli;
use crate::config::Settings;
use crate::error::{EdgeupError, Result};
use crate::portal::{PortalApi, PortalClient};

/// Environment variable carrying the login password.
pub const PASSWORD_ENV: &str = "EDGEUP_PASSWORD";

pub(crate) fn resolve_host(cli: &Cli, settings: &Settings) -> Result<String> {
    cli.host
        .clone()
        .or_else(|| settings.portal.host.clone())
        .ok_or_else(|| {
            EdgeupError::Config(
                "no portal host; pass --host or set portal.host in the settings file".to_string(),
            )
        })
}

pub(crate) fn resolve_username(cli: &Cli, settings: &Settings) -> Result<String> {
    cli.username
        .clone()
        .or_else(|| settings.portal.username.clone())
        .ok_or_else(|| {
            EdgeupError::Config(
                "no login username; pass --username or set portal.username in the settings file"
                    .to_string(),
            )
        })
}

pub(crate) fn resolve_enterprise(arg: Option<i64>, settings: &Settings) -> Result<i64> {
    arg.or(settings.portal.enterprise_id).ok_or_else(|| {
        EdgeupError::Config(
            "no enterprise id; pass --enterprise or set portal.enterprise_id in the settings file"
                .to_string(),
        )
    })
}

pub(crate) fn password_from_env() -> Result<String> {
    std::env::var(PASSWORD_ENV)
        .map_err(|_| EdgeupError::Config(format!("{} is not set", PASSWORD_ENV)))
}

pub(crate) fn insecure(cli: &Cli, settings: &Settings) -> bool {
    cli.insecure || settings.portal.insecure
}

pub(crate) fn operator_login(cli: &Cli, settings: &Settings) -> bool {
    cli.operator || settings.portal.operator_login
}

/// Build a portal client and establish a session, for the read-only
/// listing commands. The upgrade workflow authenticates itself instead.
pub(crate) async fn connect(cli: &Cli, settings: &Settings) -> Result<PortalClient> {
    let host = resolve_host(cli, settings)?;
    let username = resolve_username(cli, settings)?;
    let password = password_from_env()?;

    let client = PortalClient::with_options(
        &host,
        insecure(cli, settings),
        operator_login(cli, settings),
    )?;
    client.authenticate(&username, &password).await?;
    Ok(client)
}
