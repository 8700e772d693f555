use contracts::settings::{FormSubmission, RequestKind};
use std::cell::Cell;
use std::future::Future;

use super::config::{ErrorDisplay, PanelConfig};
use super::container::FragmentContainer;
use super::error::PanelError;
use super::transport::{FragmentResponse, FragmentTransport};

/// Anything that carries the URL of a panel navigation control.
pub trait LinkTarget {
    fn href(&self) -> String;
}

impl LinkTarget for str {
    fn href(&self) -> String {
        self.to_string()
    }
}

impl LinkTarget for web_sys::HtmlAnchorElement {
    fn href(&self) -> String {
        web_sys::HtmlAnchorElement::href(self)
    }
}

/// What happened to the container after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The response body replaced the container content.
    Rendered,
    /// A newer request was issued meanwhile; the response was dropped.
    Stale,
    /// The request failed. The container is untouched unless errors are
    /// displayed inline.
    Failed(PanelError),
    /// Initial load already ran on this controller.
    Skipped,
}

/// Mediates the settings panel's requests and renders their responses into
/// a single injected container.
///
/// Requests are numbered as they are issued. With
/// [`PanelConfig::discard_stale`] a response is rendered only if its request
/// is still the latest one; otherwise the last response to arrive wins.
pub struct SettingsPanelController<T, C> {
    transport: T,
    container: C,
    config: PanelConfig,
    issued: Cell<u64>,
    loaded: Cell<bool>,
}

impl<T, C> SettingsPanelController<T, C>
where
    T: FragmentTransport,
    C: FragmentContainer,
{
    pub fn new(transport: T, container: C, config: PanelConfig) -> Self {
        Self {
            transport,
            container,
            config,
            issued: Cell::new(0),
            loaded: Cell::new(false),
        }
    }

    /// Fetch the current settings fragment. Runs at most once per controller.
    pub async fn initial_load(&self) -> Outcome {
        if self.loaded.replace(true) {
            log::debug!("Settings panel already loaded, ignoring repeated initial load");
            return Outcome::Skipped;
        }
        let url = self.config.endpoint_url();
        self.dispatch(RequestKind::InitialLoad, &url, self.transport.get(&url))
            .await
    }

    /// Fetch the view behind a panel link. The href is used verbatim.
    pub async fn follow_link<L: LinkTarget + ?Sized>(&self, link: &L) -> Outcome {
        let url = link.href();
        self.dispatch(RequestKind::FollowLink, &url, self.transport.get(&url))
            .await
    }

    /// Post the submission to the settings endpoint.
    ///
    /// The body is encoded before anything is awaited, so the payload is
    /// fixed at call time.
    pub async fn submit_form(&self, submission: FormSubmission) -> Outcome {
        let body = submission.to_urlencoded();
        let url = self.config.endpoint_url();
        self.dispatch(RequestKind::SubmitForm, &url, self.transport.post_form(&url, body))
            .await
    }

    async fn dispatch<F>(&self, kind: RequestKind, url: &str, request: F) -> Outcome
    where
        F: Future<Output = Result<FragmentResponse, PanelError>>,
    {
        let token = self.issued.get() + 1;
        self.issued.set(token);
        log::debug!("Settings {} #{}: {} {}", kind.label(), token, kind.method().as_str(), url);

        let result = request.await.and_then(FragmentResponse::into_fragment);

        if self.config.discard_stale && token != self.issued.get() {
            log::debug!(
                "Settings {} #{} superseded by #{}, response dropped",
                kind.label(),
                token,
                self.issued.get()
            );
            return Outcome::Stale;
        }

        match result {
            Ok(fragment) => {
                self.container.render(fragment.as_str());
                Outcome::Rendered
            }
            Err(err) => {
                log::warn!("Settings {} failed: {}", kind.label(), err);
                if self.config.error_display == ErrorDisplay::Inline {
                    self.container.render(&err.inline_html());
                }
                Outcome::Failed(err)
            }
        }
    }
}
