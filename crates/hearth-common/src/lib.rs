pub mod errors;
pub mod id;

pub use errors::{ConfigError, HearthError};
pub use id::{new_conversation_id, new_entry_id, ConversationId};

pub type Result<T> = std::result::Result<T, HearthError>;
