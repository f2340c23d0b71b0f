// Local checks run before a request is built

use crate::error::ValidationError;
use crate::push::PushNotification;
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of channels a single trigger may target
pub const MAX_TRIGGER_CHANNELS: usize = 10;

/// Maximum channel name length, prefixes included
pub const MAX_CHANNEL_NAME_LENGTH: usize = 200;

/// Serialized event data must be strictly smaller than this
pub const MAX_DATA_SIZE: usize = 10_240;

static CHANNEL_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_\-=@,.;]+$").expect("valid channel name pattern"));

static SOCKET_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]+$").expect("valid socket id pattern"));

/// Names made only of dots are refused: in a URL path they are `.`/`..`
/// segments and would address a different resource than the one signed.
pub fn validate_channel_name(channel: &str) -> Result<(), ValidationError> {
    if channel.len() > MAX_CHANNEL_NAME_LENGTH
        || !CHANNEL_NAME.is_match(channel)
        || channel.bytes().all(|b| b == b'.')
    {
        return Err(ValidationError::InvalidChannelName);
    }
    Ok(())
}

/// A single bad name rejects the whole set.
pub fn validate_channels<S: AsRef<str>>(channels: &[S]) -> Result<(), ValidationError> {
    if channels.is_empty() {
        return Err(ValidationError::NoChannels);
    }
    if channels.len() > MAX_TRIGGER_CHANNELS {
        return Err(ValidationError::ChannelCountExceeded);
    }
    channels
        .iter()
        .try_for_each(|channel| validate_channel_name(channel.as_ref()))
}

pub fn validate_data(data: &str) -> Result<(), ValidationError> {
    if data.len() >= MAX_DATA_SIZE {
        return Err(ValidationError::PayloadTooLarge);
    }
    Ok(())
}

pub fn validate_socket_id(socket_id: &str) -> Result<(), ValidationError> {
    if !SOCKET_ID.is_match(socket_id) {
        return Err(ValidationError::InvalidExclusionToken);
    }
    Ok(())
}

pub fn validate_push_notification(
    interests: &[String],
    notification: &PushNotification,
) -> Result<(), ValidationError> {
    if interests.is_empty() {
        return Err(ValidationError::NoInterests);
    }
    if !notification.has_platform_payload() {
        return Err(ValidationError::EmptyPushPayload);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_prefixed_channel_names() {
        assert!(validate_channel_name("presence-room").is_ok());
        assert!(validate_channel_name("private-a_b-c=d@e,f.g;h").is_ok());
    }

    #[test]
    fn rejects_illegal_characters() {
        assert_eq!(
            validate_channel_name("w000^$$£@@@"),
            Err(ValidationError::InvalidChannelName)
        );
        assert_eq!(
            validate_channel_name("with space"),
            Err(ValidationError::InvalidChannelName)
        );
        assert_eq!(validate_channel_name(""), Err(ValidationError::InvalidChannelName));
    }

    #[test]
    fn rejects_dot_only_names() {
        for name in [".", "..", "..."] {
            assert_eq!(
                validate_channel_name(name),
                Err(ValidationError::InvalidChannelName),
                "{}",
                name
            );
        }
        assert!(validate_channel_name("..a").is_ok());
        assert!(validate_channel_name(".x.").is_ok());
    }

    #[test]
    fn channel_name_length_limit() {
        assert!(validate_channel_name(&"a".repeat(200)).is_ok());
        assert_eq!(
            validate_channel_name(&"a".repeat(201)),
            Err(ValidationError::InvalidChannelName)
        );
        assert_eq!(
            validate_channel_name(&"a".repeat(203)),
            Err(ValidationError::InvalidChannelName)
        );
    }

    #[test]
    fn channel_count_checked_before_names() {
        let channels: Vec<String> = (0..11).map(|_| "^bad^".to_string()).collect();
        assert_eq!(
            validate_channels(&channels),
            Err(ValidationError::ChannelCountExceeded)
        );
    }

    #[test]
    fn one_bad_channel_rejects_all() {
        assert_eq!(
            validate_channels(&["good", "also-good", "b@d^"]),
            Err(ValidationError::InvalidChannelName)
        );
    }

    #[test]
    fn empty_channel_list_rejected() {
        let channels: [&str; 0] = [];
        assert_eq!(validate_channels(&channels), Err(ValidationError::NoChannels));
    }

    #[test]
    fn data_size_boundary() {
        assert!(validate_data(&"a".repeat(MAX_DATA_SIZE - 1)).is_ok());
        assert_eq!(
            validate_data(&"a".repeat(MAX_DATA_SIZE)),
            Err(ValidationError::PayloadTooLarge)
        );
    }

    #[test]
    fn socket_id_format() {
        assert!(validate_socket_id("1234.12").is_ok());
        assert_eq!(
            validate_socket_id("1234.12:lalala"),
            Err(ValidationError::InvalidExclusionToken)
        );
        assert!(validate_socket_id("1234").is_err());
        assert!(validate_socket_id(".12").is_err());
        assert!(validate_socket_id("-1.2").is_err());
    }
}
