//! Formats GitHub Actions build-status events into Slack message payloads.
//!
//! The crate is a single-layer formatter: a typed [`github::events::EventContext`]
//! plus a handful of scalar parameters go in, one Slack attachment comes out.
//! Fetching the event payload and delivering the attachment over HTTP are the
//! caller's responsibility.

pub mod error;
pub mod github;
pub mod slack;
