//! Inbound credential handling: extraction, redaction, and the authorization hook.

pub mod context;
pub mod credential;
pub mod extract;
pub mod policy;

pub use context::*;
pub use credential::*;
pub use extract::*;
pub use policy::*;
