use slack_notify_build::error::Error;
use slack_notify_build::github::events::{EventContext, RunContext};

fn base_context() -> RunContext {
    RunContext {
        repository: Some("voxmedia/github-action-slack-notify-build".into()),
        repository_url: Some("https://github.com/voxmedia/github-action-slack-notify-build".into()),
        actor: Some("Codertocat".into()),
        workflow: Some("CI".into()),
        ..RunContext::default()
    }
}

#[test]
fn detects_push_from_sha() {
    let ctx = RunContext {
        sha: Some("abc123".into()),
        ref_name: Some("my-branch".into()),
        ..base_context()
    };

    let event = EventContext::from_context(ctx).unwrap();
    assert_eq!(event.variant(), "push");

    let EventContext::Push(push) = event else {
        panic!("expected push variant");
    };
    assert_eq!(push.sha, "abc123");
    assert_eq!(push.branch, "my-branch");
}

#[test]
fn pull_request_number_wins_over_sha() {
    let ctx = RunContext {
        sha: Some("xyz678".into()),
        ref_name: Some("feature".into()),
        pull_request_number: Some(1),
        pull_request_title: Some("This is a PR".into()),
        ..base_context()
    };

    let event = EventContext::from_context(ctx).unwrap();
    assert_eq!(event.variant(), "pull_request");

    let EventContext::PullRequest(pr) = event else {
        panic!("expected pull_request variant");
    };
    assert_eq!(pr.number, 1);
    assert_eq!(pr.title, "This is a PR");
    assert_eq!(pr.sha, "xyz678");
}

#[test]
fn bare_ref_name_is_workflow_dispatch() {
    let ctx = RunContext {
        ref_name: Some("my-branch".into()),
        ..base_context()
    };

    let event = EventContext::from_context(ctx).unwrap();
    assert_eq!(event.variant(), "workflow_dispatch");

    let EventContext::WorkflowDispatch(dispatch) = event else {
        panic!("expected workflow_dispatch variant");
    };
    assert_eq!(dispatch.ref_name, "my-branch");
}

#[test]
fn push_without_ref_name_is_missing_field() {
    let ctx = RunContext {
        sha: Some("abc123".into()),
        ..base_context()
    };

    let err = EventContext::from_context(ctx).unwrap_err();
    assert!(matches!(err, Error::MissingField("ref_name")));
}

#[test]
fn pull_request_without_title_is_missing_field() {
    let ctx = RunContext {
        sha: Some("xyz678".into()),
        pull_request_number: Some(1),
        ..base_context()
    };

    let err = EventContext::from_context(ctx).unwrap_err();
    assert!(matches!(err, Error::MissingField("pull_request_title")));
}

#[test]
fn missing_repository_url_is_reported() {
    let ctx = RunContext {
        repository_url: None,
        sha: Some("abc123".into()),
        ref_name: Some("main".into()),
        ..base_context()
    };

    let err = EventContext::from_context(ctx).unwrap_err();
    assert!(matches!(err, Error::MissingField("repository_url")));
}

#[test]
fn context_without_discriminator_is_unrecognized() {
    // Repository and actor alone don't identify a trigger shape. The
    // discriminator check runs before any required-field check.
    let err = EventContext::from_context(base_context()).unwrap_err();
    assert!(matches!(err, Error::UnrecognizedEvent));
}

#[test]
fn empty_context_is_unrecognized() {
    let err = EventContext::from_context(RunContext::default()).unwrap_err();
    assert!(matches!(err, Error::UnrecognizedEvent));
}

#[test]
fn decodes_json_payload() {
    let payload = serde_json::json!({
        "repository": "voxmedia/github-action-slack-notify-build",
        "repository_url": "https://github.com/voxmedia/github-action-slack-notify-build",
        "sha": "abc123",
        "ref_name": "my-branch",
        "actor": "Codertocat",
        "workflow": "CI",
    });

    let event = EventContext::from_payload(payload.to_string().as_bytes()).unwrap();
    assert_eq!(event.variant(), "push");
    assert_eq!(event.actor(), "Codertocat");
    assert_eq!(event.workflow(), "CI");
    assert_eq!(
        event.repository().full_name,
        "voxmedia/github-action-slack-notify-build"
    );
}

#[test]
fn rejects_malformed_json_payload() {
    let err = EventContext::from_payload(b"{not json").unwrap_err();
    assert!(matches!(err, Error::InvalidPayload(_)));
}
