use contracts::settings::{is_success_status, SettingsFragment};
use std::future::Future;

use super::error::PanelError;

/// Raw reply of a settings request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentResponse {
    pub status: u16,
    pub body: String,
}

impl FragmentResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// The body as a fragment when the status counts as success.
    pub fn into_fragment(self) -> Result<SettingsFragment, PanelError> {
        if is_success_status(self.status) {
            Ok(SettingsFragment::from(self.body))
        } else {
            Err(PanelError::Server {
                status: self.status,
            })
        }
    }
}

/// HTTP seam of the settings panel.
///
/// The returned futures are not `Send`: the panel lives on the browser's
/// single-threaded event loop.
pub trait FragmentTransport {
    fn get(&self, url: &str) -> impl Future<Output = Result<FragmentResponse, PanelError>>;

    /// POST a `application/x-www-form-urlencoded` body.
    fn post_form(
        &self,
        url: &str,
        body: String,
    ) -> impl Future<Output = Result<FragmentResponse, PanelError>>;
}
