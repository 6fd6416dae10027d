use serde::Serialize;
use tracing::debug;

use crate::github::events::EventContext;

/// Colors for build status
pub const COLOR_SUCCESS: &str = "good"; // Green
pub const COLOR_FAILURE: &str = "danger"; // Red
pub const COLOR_WARNING: &str = "warning"; // Yellow

/// A title/value pair within an attachment. `short` fields render
/// side-by-side in the Slack client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub title: String,
    pub value: String,
    pub short: bool,
}

impl Field {
    pub fn short(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short: true,
        }
    }

    pub fn long(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short: false,
        }
    }
}

/// One color-coded block of fields in Slack's legacy attachment schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    pub color: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone)]
pub struct AttachmentRequest {
    pub status: String,
    pub color: String,
    pub show_event: bool,
    pub event: EventContext,
    pub message: Option<String>,
}

/// Slack hyperlink markup. The spaces around the pipe are part of the format
/// the receiving client expects.
fn link(url: &str, text: &str) -> String {
    format!("<{url} | {text}>")
}

/// Build the attachment list for a build-status notification.
///
/// Always a single attachment. Field order is fixed: Status, Repo, Author,
/// Action, then (when `show_event`) the variant-specific Branch or Pull
/// Request field, then (when non-empty) the free-text Message. The Message
/// field is independent of `show_event`.
pub fn build_attachments(req: &AttachmentRequest) -> Vec<Attachment> {
    let repo = req.event.repository();

    let mut fields = vec![
        Field::short("Status", req.status.clone()),
        Field::short("Repo", link(&repo.url, &repo.full_name)),
        Field::short("Author", req.event.actor()),
        action_field(&req.event),
    ];

    if req.show_event {
        fields.push(event_field(&req.event));
    }

    if let Some(message) = req.message.as_deref().filter(|m| !m.is_empty()) {
        fields.push(Field::long("Message", message));
    }

    debug!(
        variant = req.event.variant(),
        field_count = fields.len(),
        "built slack attachment"
    );

    vec![Attachment {
        color: req.color.clone(),
        fields,
    }]
}

fn action_field(event: &EventContext) -> Field {
    let value = match event {
        EventContext::Push(e) => link(
            &format!("{}/commit/{}/checks", e.repository.url, e.sha),
            &e.workflow,
        ),
        EventContext::PullRequest(e) => link(
            &format!("{}/commit/{}/checks", e.repository.url, e.sha),
            &e.workflow,
        ),
        // No commit to anchor the checks page to, so no hyperlink.
        EventContext::WorkflowDispatch(e) => e.workflow.clone(),
    };
    Field::short("Action", value)
}

fn event_field(event: &EventContext) -> Field {
    match event {
        EventContext::Push(e) => Field::short(
            "Branch",
            link(&format!("{}/commit/{}", e.repository.url, e.sha), &e.branch),
        ),
        EventContext::PullRequest(e) => Field::short(
            "Pull Request",
            link(&format!("{}/pulls/{}", e.repository.url, e.number), &e.title),
        ),
        EventContext::WorkflowDispatch(e) => Field::short("Branch", e.ref_name.clone()),
    }
}
