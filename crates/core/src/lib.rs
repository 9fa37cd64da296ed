//! Per-session history of visited controller actions, used to navigate back
//! to the last meaningful screen.

pub mod entity;
pub mod error;
pub mod history;
pub mod request;
pub mod skip;

pub use entity::{
    same_entity, Argument, Arguments, Entity, EntityRef, IdentityArguments, IdentityConverter,
};
pub use error::HistoryError;
pub use history::{ActionHistory, EntryId, HistoryEntry};
pub use request::{NavigationalRequest, RequestOverride};
pub use skip::{Pattern, SkipRule, SkipRules};
