//! Session management
//!
//! One `EntryLog` per session, owned by the [`SessionRegistry`]. Used by the
//! HTTP service; the terminal notebook owns its single log directly.

pub mod registry;

pub use registry::{RegistryConfig, SessionError, SessionHandle, SessionId, SessionRegistry};
