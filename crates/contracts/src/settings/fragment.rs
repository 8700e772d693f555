/// Server-rendered HTML for the settings panel.
///
/// Treated as an opaque blob: it is never parsed or escaped, only swapped
/// into the container as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsFragment(String);

impl SettingsFragment {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SettingsFragment {
    fn from(html: String) -> Self {
        Self(html)
    }
}
