use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub full_name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushEvent {
    pub repository: Repository,
    pub sha: String,
    pub branch: String,
    pub actor: String,
    pub workflow: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestEvent {
    pub repository: Repository,
    pub sha: String,
    pub number: u64,
    pub title: String,
    pub actor: String,
    pub workflow: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowDispatchEvent {
    pub repository: Repository,
    pub ref_name: String,
    pub actor: String,
    pub workflow: String,
}

/// The three build-trigger shapes a workflow run can carry. Exactly one
/// variant is active per run; downstream formatting matches exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventContext {
    Push(PushEvent),
    PullRequest(PullRequestEvent),
    WorkflowDispatch(WorkflowDispatchEvent),
}

/// Raw scalar context extracted from a GitHub Actions run, before the
/// event variant is known. Every field is optional; [`EventContext::from_context`]
/// decides which shape it is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunContext {
    pub repository: Option<String>,
    pub repository_url: Option<String>,
    pub sha: Option<String>,
    pub ref_name: Option<String>,
    pub pull_request_number: Option<u64>,
    pub pull_request_title: Option<String>,
    pub actor: Option<String>,
    pub workflow: Option<String>,
}

fn require<T>(field: Option<T>, name: &'static str) -> Result<T> {
    field.ok_or(Error::MissingField(name))
}

impl EventContext {
    /// Detect the event variant from a raw run context.
    ///
    /// Discriminator priority: a pull-request number wins over a commit sha,
    /// which wins over a bare ref name. A workflow_dispatch re-run carries a
    /// ref name but never a sha or PR number, so the order matters.
    pub fn from_context(ctx: RunContext) -> Result<Self> {
        let RunContext {
            repository,
            repository_url,
            sha,
            ref_name,
            pull_request_number,
            pull_request_title,
            actor,
            workflow,
        } = ctx;

        if pull_request_number.is_none() && sha.is_none() && ref_name.is_none() {
            return Err(Error::UnrecognizedEvent);
        }

        let repository = Repository {
            full_name: require(repository, "repository")?,
            url: require(repository_url, "repository_url")?,
        };
        let actor = require(actor, "actor")?;
        let workflow = require(workflow, "workflow")?;

        let event = if let Some(number) = pull_request_number {
            Self::PullRequest(PullRequestEvent {
                repository,
                sha: require(sha, "sha")?,
                number,
                title: require(pull_request_title, "pull_request_title")?,
                actor,
                workflow,
            })
        } else if let Some(sha) = sha {
            Self::Push(PushEvent {
                repository,
                sha,
                branch: require(ref_name, "ref_name")?,
                actor,
                workflow,
            })
        } else {
            Self::WorkflowDispatch(WorkflowDispatchEvent {
                repository,
                ref_name: require(ref_name, "ref_name")?,
                actor,
                workflow,
            })
        };

        debug!(variant = event.variant(), "detected event context");
        Ok(event)
    }

    /// Decode a JSON-encoded [`RunContext`] and detect its variant.
    pub fn from_payload(payload: &[u8]) -> Result<Self> {
        let ctx: RunContext =
            serde_json::from_slice(payload).map_err(|e| Error::InvalidPayload(e.to_string()))?;
        Self::from_context(ctx)
    }

    pub fn variant(&self) -> &'static str {
        match self {
            Self::Push(_) => "push",
            Self::PullRequest(_) => "pull_request",
            Self::WorkflowDispatch(_) => "workflow_dispatch",
        }
    }

    pub fn repository(&self) -> &Repository {
        match self {
            Self::Push(e) => &e.repository,
            Self::PullRequest(e) => &e.repository,
            Self::WorkflowDispatch(e) => &e.repository,
        }
    }

    pub fn actor(&self) -> &str {
        match self {
            Self::Push(e) => &e.actor,
            Self::PullRequest(e) => &e.actor,
            Self::WorkflowDispatch(e) => &e.actor,
        }
    }

    pub fn workflow(&self) -> &str {
        match self {
            Self::Push(e) => &e.workflow,
            Self::PullRequest(e) => &e.workflow,
            Self::WorkflowDispatch(e) => &e.workflow,
        }
    }
}
