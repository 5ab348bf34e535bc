//! Best-effort forwarding of read-state changes to the remote collector.
//!
//! Every failure ends here as a log line. Nothing is retried and the caller
//! never learns about it, so a lost notification never undoes a local toggle.

use crate::config::AppConfig;
use crate::models::{SyncAck, Task};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The collector answered `{"status": "success"}`.
    Confirmed,
    /// 2xx JSON response without a success status.
    Unconfirmed,
    Failed(String),
}

#[async_trait]
pub trait SyncForwarder: Send + Sync {
    async fn send(&self, task: &Task) -> SyncOutcome;
}

pub struct HttpForwarder {
    client: Client,
    endpoint: String,
}

impl HttpForwarder {
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.sync_timeout).build()?;
        Ok(Self {
            client,
            endpoint: config.sync_url.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, task: &Task) -> Result<SyncOutcome, reqwest::Error> {
        let response = self.client.post(&self.endpoint).json(task).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Ok(SyncOutcome::Failed(format!("collector responded with {status}")));
        }

        let body = response.bytes().await?;
        let ack = match serde_json::from_slice::<SyncAck>(&body) {
            Ok(ack) => ack,
            Err(err) => return Ok(SyncOutcome::Failed(format!("unreadable collector response: {err}"))),
        };
        match ack.status.as_deref() {
            Some("success") => Ok(SyncOutcome::Confirmed),
            _ => Ok(SyncOutcome::Unconfirmed),
        }
    }
}

#[async_trait]
impl SyncForwarder for HttpForwarder {
    async fn send(&self, task: &Task) -> SyncOutcome {
        let outcome = match self.post(task).await {
            Ok(outcome) => outcome,
            Err(err) => SyncOutcome::Failed(err.to_string()),
        };

        match &outcome {
            SyncOutcome::Confirmed => info!(task_id = task.id, read = task.read, "task state forwarded"),
            SyncOutcome::Unconfirmed => {
                warn!(task_id = task.id, "collector did not confirm task state change")
            }
            SyncOutcome::Failed(reason) => {
                error!(task_id = task.id, "failed to forward task state: {reason}")
            }
        }
        outcome
    }
}

/// Runs `send` on its own task so the caller never waits on the network.
pub fn dispatch(forwarder: Arc<dyn SyncForwarder>, task: Task) -> JoinHandle<SyncOutcome> {
    tokio::spawn(async move { forwarder.send(&task).await })
}
