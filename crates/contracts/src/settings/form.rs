/// Name/value pairs collected from the settings form at submit time.
///
/// Pairs keep document order and repeated names (multi-selects, checkbox
/// groups) stay as separate entries. Values are stored with line breaks
/// normalized to `\r\n`, the way browsers submit textareas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    fields: Vec<(String, String)>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = normalize_line_breaks(&value.into());
        self.fields.push((name.into(), value));
    }

    /// `application/x-www-form-urlencoded` body, e.g. `key=new+val&flag=on`.
    pub fn to_urlencoded(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| format!("{}={}", encode_component(name), encode_component(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn normalize_line_breaks(value: &str) -> String {
    if !value.contains('\n') {
        return value.to_string();
    }
    value.replace("\r\n", "\n").replace('\n', "\r\n")
}

/// Percent-encodes like `encodeURIComponent`, then turns spaces into `+`.
fn encode_component(raw: &str) -> String {
    urlencoding::encode(raw)
        .replace("%20", "+")
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}
