// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Reqwest implementation of the portal API
//!
//! The portal speaks a JSON-RPC dialect: every call is a POST to
//! `/portal/` with a `method`/`params` envelope, authenticated by a
//! session cookie obtained from a form login.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::error::{ApiError, EdgeupError, Result};
use crate::portal::types::{Edge, Enterprise, OperatorProfile, UpgradeRequest};
use crate::portal::PortalApi;

const ENTERPRISE_LOGIN_PATH: &str = "/login/enterpriseLogin";
const OPERATOR_LOGIN_PATH: &str = "/login/operatorLogin";
const PORTAL_PATH: &str = "/portal/";
const SESSION_COOKIE: &str = "velocloud.session";

/// HTTP client for the orchestrator portal
pub struct PortalClient {
    client: Client,
    base_url: String,
    login_path: &'static str,
    request_id: AtomicI64,
}

impl PortalClient {
    /// Create a client for a portal host, verifying TLS, enterprise login.
    pub fn new(host: impl AsRef<str>) -> Result<Self> {
        Self::with_options(host, false, false)
    }

    /// Create a client with explicit TLS and login-path choices.
    ///
    /// `insecure` accepts self-signed portal certificates; `operator_login`
    /// authenticates against the operator login endpoint instead of the
    /// enterprise one.
    pub fn with_options(host: impl AsRef<str>, insecure: bool, operator_login: bool) -> Result<Self> {
        // Login success is signaled by a Set-Cookie on the immediate
        // response; redirects are not followed so it stays observable.
        let client = Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .danger_accept_invalid_certs(insecure)
            .build()?;

        Ok(Self {
            client,
            base_url: normalize_base_url(host.as_ref()),
            login_path: if operator_login {
                OPERATOR_LOGIN_PATH
            } else {
                ENTERPRISE_LOGIN_PATH
            },
            request_id: AtomicI64::new(1),
        })
    }

    fn next_request_id(&self) -> i64 {
        self.request_id.fetch_add(1, Ordering::Relaxed)
    }

    /// POST one portal method call and unwrap its result envelope.
    async fn call_api(&self, method: &str, params: Value) -> Result<Value> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": self.next_request_id(),
            "method": method,
            "params": params,
        });

        tracing::debug!(method, "portal call");

        let response = self
            .client
            .post(format!("{}{}", self.base_url, PORTAL_PATH))
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::ServerError { status, message }.into());
        }

        let envelope: Value = response.json().await?;
        unwrap_envelope(envelope)
    }
}

/// Extract `result` from a portal response envelope, mapping the error
/// envelope to `ApiError::Rpc`.
fn unwrap_envelope(envelope: Value) -> Result<Value> {
    if let Some(error) = envelope.get("error") {
        let code = error.get("code").and_then(Value::as_i64).unwrap_or(0);
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown portal error")
            .to_string();
        return Err(ApiError::Rpc { code, message }.into());
    }

    match envelope.get("result") {
        Some(result) => Ok(result.clone()),
        None => Err(EdgeupError::from(ApiError::InvalidResponse(
            "response envelope carries neither result nor error".to_string(),
        ))),
    }
}

/// Accept a bare hostname or a full URL; yield a scheme-qualified base
/// with no trailing slash.
fn normalize_base_url(host: &str) -> String {
    let trimmed = host.trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

#[async_trait]
impl PortalApi for PortalClient {
    async fn authenticate(&self, username: &str, password: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, self.login_path);
        let response = self
            .client
            .post(&url)
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;

        let status = response.status().as_u16();
        if status >= 400 {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::ServerError { status, message }.into());
        }

        // The portal answers the login POST with a session cookie on
        // success, and a cookie-less redirect back to the login page on
        // bad credentials.
        let authenticated = response.cookies().any(|c| c.name() == SESSION_COOKIE);
        if !authenticated {
            return Err(ApiError::AuthenticationFailed.into());
        }

        tracing::debug!("portal session established");
        Ok(())
    }

    async fn get_enterprise(&self, enterprise_id: i64) -> Result<Enterprise> {
        let result = self
            .call_api("enterprise/getEnterprise", json!({ "id": enterprise_id }))
            .await?;
        Ok(serde_json::from_value(result)?)
    }

    async fn get_operator_profiles(&self) -> Result<Vec<OperatorProfile>> {
        let result = self
            .call_api(
                "enterpriseProxy/getEnterpriseProxyOperatorProfiles",
                json!({ "with": ["edges", "enterprises", "modules"] }),
            )
            .await?;
        Ok(serde_json::from_value(result)?)
    }

    async fn get_enterprise_edges(&self, enterprise_id: i64) -> Result<Vec<Edge>> {
        let result = self
            .call_api(
                "enterprise/getEnterpriseEdgeList",
                json!({ "enterpriseId": enterprise_id, "with": ["ha", "configuration"] }),
            )
            .await?;
        Ok(serde_json::from_value(result)?)
    }

    async fn set_edge_operator_configuration(&self, request: &UpgradeRequest) -> Result<Value> {
        self.call_api("edge/setEdgeOperatorConfiguration", serde_json::to_value(request)?)
            .await
    }
}
