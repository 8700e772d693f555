use contracts::settings::endpoint::{
    FORM_CONTENT_TYPE, REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE,
};
use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use std::future::Future;
use std::pin::pin;

use super::error::PanelError;
use super::transport::{FragmentResponse, FragmentTransport};

/// Browser `fetch` transport built on gloo-net.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport {
    timeout_ms: Option<u32>,
}

impl GlooTransport {
    pub fn new(timeout_ms: Option<u32>) -> Self {
        Self { timeout_ms }
    }
}

impl FragmentTransport for GlooTransport {
    fn get(&self, url: &str) -> impl Future<Output = Result<FragmentResponse, PanelError>> {
        let request = Request::get(url)
            .header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)
            .build();
        with_timeout(self.timeout_ms, send(request))
    }

    fn post_form(
        &self,
        url: &str,
        body: String,
    ) -> impl Future<Output = Result<FragmentResponse, PanelError>> {
        let request = Request::post(url)
            .header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(body);
        with_timeout(self.timeout_ms, send(request))
    }
}

async fn send(
    request: Result<Request, gloo_net::Error>,
) -> Result<FragmentResponse, PanelError> {
    let response = request
        .map_err(|e| PanelError::Network(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| PanelError::Network(format!("Failed to send request: {}", e)))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| PanelError::Network(format!("Failed to read response: {}", e)))?;

    Ok(FragmentResponse::new(status, body))
}

async fn with_timeout<F>(timeout_ms: Option<u32>, request: F) -> Result<FragmentResponse, PanelError>
where
    F: Future<Output = Result<FragmentResponse, PanelError>>,
{
    let Some(ms) = timeout_ms else {
        return request.await;
    };

    let request = pin!(request);
    let timer = pin!(TimeoutFuture::new(ms));
    match future::select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(PanelError::Timeout { ms }),
    }
}
