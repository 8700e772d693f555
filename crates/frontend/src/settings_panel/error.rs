use thiserror::Error;

/// Why a settings request produced nothing to render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with status {status}")]
    Server { status: u16 },

    #[error("request timed out after {ms} ms")]
    Timeout { ms: u32 },
}

impl PanelError {
    /// Short message shown to the user when errors are displayed inline.
    pub fn user_message(&self) -> String {
        match self {
            PanelError::Network(_) => {
                "Settings could not be reached. Check your connection and try again.".to_string()
            }
            PanelError::Server { status } => {
                format!("The server could not process the settings request ({}).", status)
            }
            PanelError::Timeout { .. } => {
                "The settings request took too long. Please try again.".to_string()
            }
        }
    }

    /// Markup rendered into the container for [`ErrorDisplay::Inline`](super::ErrorDisplay::Inline).
    pub fn inline_html(&self) -> String {
        format!(
            "<div class=\"settings-panel-error\" role=\"alert\">{}</div>",
            escape_html(&self.user_message())
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            PanelError::Server { status: 500 }.to_string(),
            "server responded with status 500"
        );
        assert_eq!(
            PanelError::Timeout { ms: 3000 }.to_string(),
            "request timed out after 3000 ms"
        );
    }

    #[test]
    fn test_inline_html() {
        let html = PanelError::Server { status: 502 }.inline_html();
        assert!(html.starts_with("<div class=\"settings-panel-error\""));
        assert!(html.contains("(502)"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"a\" & 'b'</b>"),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
    }
}
