// Wire types of the Pusher REST API

pub mod channels;
pub mod messages;

// Re-export key types
pub use channels::{Channel, ChannelListItem, ChannelsList, User, Users};
pub use messages::{serialize_data, BatchBody, BatchEntry, Event, TriggerBody};
