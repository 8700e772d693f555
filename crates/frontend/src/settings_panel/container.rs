use leptos::html::Div;
use leptos::prelude::*;

/// Page region whose content is replaced by each settings response.
pub trait FragmentContainer {
    /// Replace the whole content with `html`, unescaped. Every call writes,
    /// even when `html` equals what is already shown.
    fn render(&self, html: &str);
}

/// The panel's own `<div>`, written through `innerHTML` directly so that
/// re-rendering an identical fragment still resets the form inside it.
impl FragmentContainer for NodeRef<Div> {
    fn render(&self, html: &str) {
        match self.get_untracked() {
            Some(div) => div.set_inner_html(html),
            None => log::warn!("Settings panel container is not mounted, fragment dropped"),
        }
    }
}
