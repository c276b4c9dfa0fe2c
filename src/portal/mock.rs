// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Mock portal for testing
//!
//! Provides a configurable in-memory implementation of the PortalApi
//! trait so workflow tests run without a reachable orchestrator.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::{ApiError, Result};
use crate::portal::types::{Edge, Enterprise, OperatorProfile, UpgradeRequest};
use crate::portal::PortalApi;

/// A scripted response for one upgrade submission.
#[derive(Debug, Clone)]
pub enum MockSubmitResponse {
    /// Return this body as the call result
    Body(Value),
    /// Fail the call at the transport level
    TransportError(String),
}

/// A mock portal for testing
#[derive(Clone, Default)]
pub struct MockPortal {
    enterprises: Arc<Mutex<HashMap<i64, Enterprise>>>,
    profiles: Arc<Mutex<Vec<OperatorProfile>>>,
    edges: Arc<Mutex<Vec<Edge>>>,
    submit_responses: Arc<Mutex<VecDeque<MockSubmitResponse>>>,
    recorded_upgrades: Arc<Mutex<Vec<UpgradeRequest>>>,
    fail_auth: Arc<Mutex<bool>>,
    auth_calls: Arc<AtomicUsize>,
    profile_list_calls: Arc<AtomicUsize>,
    edge_list_calls: Arc<AtomicUsize>,
}

impl MockPortal {
    /// Create an empty mock portal
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an enterprise record
    pub fn with_enterprise(self, id: i64, network_id: i64) -> Self {
        self.lock(&self.enterprises).insert(
            id,
            Enterprise {
                id,
                network_id,
                name: None,
            },
        );
        self
    }

    /// Set the visible operator profiles
    pub fn with_profiles(self, profiles: Vec<OperatorProfile>) -> Self {
        *self.lock(&self.profiles) = profiles;
        self
    }

    /// Set the enterprise edge listing, in listing order
    pub fn with_edges(self, edges: Vec<Edge>) -> Self {
        *self.lock(&self.edges) = edges;
        self
    }

    /// Queue submission responses, consumed in order.
    ///
    /// Once the queue is empty, submissions answer `{"rows": 1}`.
    pub fn with_submit_responses(self, responses: Vec<MockSubmitResponse>) -> Self {
        *self.lock(&self.submit_responses) = responses.into();
        self
    }

    /// Make authentication fail
    pub fn with_auth_failure(self) -> Self {
        *self.lock(&self.fail_auth) = true;
        self
    }

    /// Upgrade requests received so far, in submission order
    pub fn recorded_upgrades(&self) -> Vec<UpgradeRequest> {
        self.lock(&self.recorded_upgrades).clone()
    }

    /// Number of authenticate calls
    pub fn auth_calls(&self) -> usize {
        self.auth_calls.load(Ordering::SeqCst)
    }

    /// Number of profile-list calls
    pub fn profile_list_calls(&self) -> usize {
        self.profile_list_calls.load(Ordering::SeqCst)
    }

    /// Number of edge-list calls
    pub fn edge_list_calls(&self) -> usize {
        self.edge_list_calls.load(Ordering::SeqCst)
    }

    fn lock<'a, T>(&self, field: &'a Mutex<T>) -> std::sync::MutexGuard<'a, T> {
        match field.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("mock portal lock was poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }
}

#[async_trait]
impl PortalApi for MockPortal {
    async fn authenticate(&self, _username: &str, _password: &str) -> Result<()> {
        self.auth_calls.fetch_add(1, Ordering::SeqCst);
        if *self.lock(&self.fail_auth) {
            return Err(ApiError::AuthenticationFailed.into());
        }
        Ok(())
    }

    async fn get_enterprise(&self, enterprise_id: i64) -> Result<Enterprise> {
        match self.lock(&self.enterprises).get(&enterprise_id) {
            Some(enterprise) => Ok(enterprise.clone()),
            None => Err(ApiError::Rpc {
                code: -32000,
                message: format!("enterprise {} not found", enterprise_id),
            }
            .into()),
        }
    }

    async fn get_operator_profiles(&self) -> Result<Vec<OperatorProfile>> {
        self.profile_list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.lock(&self.profiles).clone())
    }

    async fn get_enterprise_edges(&self, _enterprise_id: i64) -> Result<Vec<Edge>> {
        self.edge_list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.lock(&self.edges).clone())
    }

    async fn set_edge_operator_configuration(&self, request: &UpgradeRequest) -> Result<Value> {
        self.lock(&self.recorded_upgrades).push(request.clone());

        let scripted = self.lock(&self.submit_responses).pop_front();
        match scripted {
            Some(MockSubmitResponse::Body(body)) => Ok(body),
            Some(MockSubmitResponse::TransportError(message)) => Err(ApiError::ServerError {
                status: 502,
                message,
            }
            .into()),
            None => Ok(json!({ "rows": 1 })),
        }
    }
}
