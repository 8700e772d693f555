//! Account settings panel: loads the server-rendered settings fragment into a
//! container, follows panel links and submits the settings form, swapping
//! each response into the same container.

pub mod config;
pub mod container;
pub mod controller;
pub mod error;
pub mod form_dom;
pub mod gloo_transport;
pub mod links;
pub mod transport;
pub mod ui;

pub use config::{ErrorDisplay, PanelConfig};
pub use container::FragmentContainer;
pub use controller::{LinkTarget, Outcome, SettingsPanelController};
pub use error::PanelError;
pub use gloo_transport::GlooTransport;
pub use transport::{FragmentResponse, FragmentTransport};
pub use ui::SettingsPanel;
