// 🟢 GREEN Phase: Production-ready error handling system
// Every failure a call can produce is one of these variants

use thiserror::Error;

/// Type alias for Pusher results
pub type PusherResult<T> = Result<T, PusherError>;

/// Local validation failures, raised before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("You cannot trigger on more than 10 channels at once")]
    ChannelCountExceeded,

    #[error("You must trigger on at least one channel")]
    NoChannels,

    #[error("At least one of your channels' names are invalid")]
    InvalidChannelName,

    #[error("Data must be smaller than 10kb")]
    PayloadTooLarge,

    #[error("socket_id invalid")]
    InvalidExclusionToken,

    #[error("Push notification must contain at least one platform payload")]
    EmptyPushPayload,

    #[error("You must notify at least one interest")]
    NoInterests,
}

#[derive(Debug, Error)]
pub enum PusherError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Decode error: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An outgoing body could not be encoded as JSON
    #[error("Serialize error: {message}")]
    Serialize {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Non-2xx response. The body is carried verbatim.
    #[error("Status Code: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Push notification host not configured")]
    NoPushHostConfigured,

    #[error("Invalid webhook: {message}")]
    Webhook { message: String },

    #[error("Invalid channel authentication request: {message}")]
    ChannelAuth { message: String },
}

impl PusherError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a transport error wrapping the underlying cause
    pub fn transport<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a decode error wrapping the underlying cause
    pub fn decode<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn serialize<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialize {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an API error from a status code and raw response body
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn webhook(message: impl Into<String>) -> Self {
        Self::Webhook {
            message: message.into(),
        }
    }

    pub fn channel_auth(message: impl Into<String>) -> Self {
        Self::ChannelAuth {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PusherError::Validation(_) => ErrorKind::Validation,
            PusherError::Config { .. } => ErrorKind::Config,
            PusherError::Transport { .. } => ErrorKind::Transport,
            PusherError::Decode { .. } => ErrorKind::Decode,
            PusherError::Serialize { .. } => ErrorKind::Serialize,
            PusherError::Api { .. } => ErrorKind::Api,
            PusherError::NoPushHostConfigured => ErrorKind::NoPushHostConfigured,
            PusherError::Webhook { .. } => ErrorKind::Webhook,
            PusherError::ChannelAuth { .. } => ErrorKind::ChannelAuth,
        }
    }

    /// HTTP status code, only present for API errors
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PusherError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The validation failure, if this error was raised locally by the validator
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            PusherError::Validation(err) => Some(err),
            _ => None,
        }
    }

    /// True when the error was detected before any request left the process
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            PusherError::Validation(_)
                | PusherError::Config { .. }
                | PusherError::Serialize { .. }
                | PusherError::NoPushHostConfigured
                | PusherError::Webhook { .. }
                | PusherError::ChannelAuth { .. }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Config,
    Transport,
    Decode,
    Serialize,
    Api,
    NoPushHostConfigured,
    Webhook,
    ChannelAuth,
}
