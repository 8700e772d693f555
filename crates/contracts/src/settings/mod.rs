//! Shared types for the account settings panel.
//!
//! Nothing here touches the browser, so the encoding rules can be exercised
//! with plain `cargo test`.

pub mod endpoint;
pub mod form;
pub mod fragment;

pub use endpoint::{is_success_status, Method, RequestKind, CREST_SETTINGS_PATH};
pub use form::FormSubmission;
pub use fragment::SettingsFragment;
