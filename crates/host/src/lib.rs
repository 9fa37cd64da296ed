//! Host-side collaborators for the action history: routed requests, identity
//! conversion, per-session storage and the redirect controller.

pub mod config;
pub mod controller;
pub mod error;
pub mod identity;
pub mod request;
pub mod session;

pub use config::HistoryConfig;
pub use controller::{HistoryController, Redirect};
pub use error::HostError;
pub use identity::IdentityReferenceConverter;
pub use request::ActionRequest;
pub use session::{SessionContext, SessionStore};
