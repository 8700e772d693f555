use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlAnchorElement, HtmlFormElement};

use super::config::PanelConfig;
use super::controller::SettingsPanelController;
use super::form_dom::serialize_form;
use super::gloo_transport::GlooTransport;
use super::links::{is_endpoint_href, is_plain_click, targets_self};

type Controller = Rc<SettingsPanelController<GlooTransport, NodeRef<Div>>>;

/// Which anchors inside the fragment are panel links.
struct LinkRule {
    selector: String,
    endpoint_url: String,
    intercept_endpoint: bool,
}

/// Server-rendered settings panel.
///
/// Loads the fragment once the container is mounted. Plain clicks on panel
/// links and submits of forms inside the fragment are intercepted and turned
/// into panel requests. Fragments are written straight into the container's
/// `innerHTML`, leptos never diffs them.
#[component]
pub fn SettingsPanel(
    /// Endpoint, form id and error handling; defaults to the CREST settings
    #[prop(optional)]
    config: Option<PanelConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let container_ref = NodeRef::<Div>::new();

    let link_rule = StoredValue::new(LinkRule {
        selector: format!("[{}]", config.link_attribute),
        endpoint_url: config.endpoint_url(),
        intercept_endpoint: config.intercept_endpoint_links,
    });
    let form_id = StoredValue::new(config.form_id.clone());

    let controller: Controller = Rc::new(SettingsPanelController::new(
        GlooTransport::new(config.timeout_ms),
        container_ref,
        config,
    ));
    let controller = StoredValue::new_local(controller);

    Effect::new(move |_| {
        if container_ref.get().is_some() {
            let loader = controller.get_value();
            spawn_local(async move {
                loader.initial_load().await;
            });
        }
    });

    let on_click = move |ev: MouseEvent| {
        if !is_plain_click(ev.button(), ev.ctrl_key(), ev.meta_key(), ev.shift_key(), ev.alt_key()) {
            return;
        }
        let Some(anchor) = link_rule.with_value(|rule| clicked_link(&ev, rule)) else {
            return;
        };
        ev.prevent_default();
        let controller = controller.get_value();
        spawn_local(async move {
            controller.follow_link(&anchor).await;
        });
    };

    let on_submit = move |ev: SubmitEvent| {
        let Some(submitted) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };
        ev.prevent_default();

        let form = form_id
            .with_value(|id| settings_form(container_ref.get_untracked().as_ref(), id))
            .unwrap_or(submitted);
        let submission = serialize_form(&form);

        let controller = controller.get_value();
        spawn_local(async move {
            controller.submit_form(submission).await;
        });
    };

    view! {
        <div
            class="settings-panel"
            node_ref=container_ref
            on:click=on_click
            on:submit=on_submit
        ></div>
    }
}

/// Panel link around the click target: marked with the link attribute, or
/// pointing into the settings endpoint when that is enabled.
fn clicked_link(ev: &MouseEvent, rule: &LinkRule) -> Option<HtmlAnchorElement> {
    let anchor = ev
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest("a[href]")
        .ok()??
        .dyn_into::<HtmlAnchorElement>()
        .ok()?;

    if !targets_self(&anchor.target()) || anchor.has_attribute("download") {
        return None;
    }
    if anchor.matches(&rule.selector).unwrap_or(false) {
        return Some(anchor);
    }
    if rule.intercept_endpoint {
        let origin = web_sys::window()?.location().origin().ok()?;
        if is_endpoint_href(&anchor.href(), &origin, &rule.endpoint_url) {
            return Some(anchor);
        }
    }
    None
}

/// The configured settings form inside the panel.
fn settings_form(container: Option<&web_sys::HtmlDivElement>, form_id: &str) -> Option<HtmlFormElement> {
    container?
        .query_selector(&format!("form[id=\"{}\"]", form_id))
        .ok()??
        .dyn_into::<HtmlFormElement>()
        .ok()
}
