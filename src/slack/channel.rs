/// Strip a single leading `#` or `@` from a channel or user-group name.
///
/// Configuration often carries the sigil (`#builds`, `@release-crew`) but the
/// Slack API wants the bare name. Anything else passes through unchanged.
pub fn format_channel_name(channel: &str) -> &str {
    channel.strip_prefix(['#', '@']).unwrap_or(channel)
}
