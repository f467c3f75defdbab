use log::debug;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config;
use crate::dom::{self, DomError};

pub fn is_in_page(href: &str) -> bool {
    href.starts_with('#')
}

/// Selector for an in-page anchor, `None` for a bare `#` or external link.
pub fn anchor_selector(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(href),
        _ => None,
    }
}

/// Document offset to scroll to so the target clears the fixed header.
pub fn scroll_destination(target_top: f64, page_y: f64) -> f64 {
    target_top + page_y - config::HEADER_OFFSET_PX
}

/// Smoothly scrolls to the element `href` points at. Returns whether a
/// target was found.
pub fn scroll_to_anchor(href: &str) -> Result<bool, DomError> {
    let Some(selector) = anchor_selector(href) else {
        return Ok(false);
    };
    let Some(target) = dom::document()?.query_selector(selector)? else {
        return Ok(false);
    };
    let window = dom::window()?;
    let top = scroll_destination(target.get_bounding_client_rect().top(), window.page_y_offset()?);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(true)
}

/// Intercepts a click on an in-page link; other links navigate normally.
pub fn intercept_anchor_click(e: &MouseEvent, href: &str) {
    if !is_in_page(href) {
        return;
    }
    e.prevent_default();
    match scroll_to_anchor(href) {
        Ok(true) => {}
        Ok(false) => debug!("no scroll target for {}", href),
        Err(err) => debug!("smooth scroll to {} failed: {}", href, err),
    }
}

pub fn anchor_onclick(href: AttrValue) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| intercept_anchor_click(&e, &href))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_hash_links_are_in_page() {
        assert!(is_in_page("#team"));
        assert!(is_in_page("#"));
        assert!(!is_in_page("https://example.com/#team"));
        assert!(!is_in_page("/about"));
    }

    #[test]
    fn bare_hash_has_no_selector() {
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector("#achievements"), Some("#achievements"));
        assert_eq!(anchor_selector("mailto:hello@example.com"), None);
    }

    #[test]
    fn destination_subtracts_header_height() {
        assert_eq!(scroll_destination(300.0, 1200.0), 1420.0);
        // A target just under the header while already scrolled
        assert_eq!(scroll_destination(20.0, 500.0), 440.0);
    }
}
