//! Click tracking forwarded to the optional `window.va` hook.
//!
//! The hook is injected by a third-party script that may be blocked or not
//! loaded yet, so every failure here is swallowed after a debug log.

use log::debug;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};
use web_sys::Window;

use crate::config;
use crate::dom;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnalyticsEvent {
    CtaClick { id: String, href: Option<String> },
    NavClick { target: Option<String> },
}

impl AnalyticsEvent {
    pub fn cta(label: &str, href: Option<&str>) -> Self {
        AnalyticsEvent::CtaClick {
            id: label.trim().to_string(),
            href: href.map(str::to_string),
        }
    }

    pub fn nav(href: Option<&str>) -> Self {
        AnalyticsEvent::NavClick {
            target: href.map(str::to_string),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::CtaClick { .. } => "cta_click",
            AnalyticsEvent::NavClick { .. } => "nav_click",
        }
    }
}

/// Sends `event` to the hook if one is installed.
pub fn track(event: &AnalyticsEvent) {
    if let Err(err) = forward(event) {
        debug!("analytics event {} dropped: {:?}", event.name(), err);
    }
}

fn forward(event: &AnalyticsEvent) -> Result<(), JsValue> {
    let Ok(window) = dom::window() else {
        return Ok(());
    };
    let Some(hook) = hook(&window) else {
        return Ok(());
    };
    let data = serde_wasm_bindgen::to_value(event)?;
    // Called as `window.va(name, data)`, so `this` is the window.
    hook.call2(&window, &JsValue::from_str(event.name()), &data)?;
    Ok(())
}

fn hook(window: &Window) -> Option<Function> {
    Reflect::get(window, &JsValue::from_str(config::ANALYTICS_HOOK))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cta_click_trims_label_and_keeps_href() {
        let event = AnalyticsEvent::cta("  Get in touch \n", Some("#contact"));
        assert_eq!(event.name(), "cta_click");
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({ "id": "Get in touch", "href": "#contact" })
        );
    }

    #[test]
    fn cta_click_without_href_serializes_null() {
        let event = AnalyticsEvent::cta("Explore", None);
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({ "id": "Explore", "href": null })
        );
    }

    #[test]
    fn nav_click_reports_target() {
        let event = AnalyticsEvent::nav(Some("#team"));
        assert_eq!(event.name(), "nav_click");
        assert_eq!(serde_json::to_value(&event).unwrap(), json!({ "target": "#team" }));
    }
}
