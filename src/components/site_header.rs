use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;
use yew::prelude::*;

use crate::analytics::{self, AnalyticsEvent};
use crate::components::smooth_scroll::{anchor_onclick, intercept_anchor_click};
use crate::config;
use crate::content::NavItem;
use crate::dom;

pub fn header_is_scrolled(offset: f64) -> bool {
    offset > config::HEADER_SCROLL_THRESHOLD_PX
}

/// Menu state after a click on `.nav-toggle`.
pub fn toggle_menu(open: bool) -> bool {
    !open
}

/// Menu state after a click on any link inside `.main-nav`.
pub fn close_on_link(_open: bool) -> bool {
    false
}

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub brand: AttrValue,
    pub items: &'static [NavItem],
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let menu_open = use_state_eq(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || {
                    if let Ok(offset) = dom::scroll_y() {
                        is_scrolled.set(header_is_scrolled(offset));
                    }
                };
                update();

                let scroll_callback = Closure::wrap(Box::new(update) as Box<dyn FnMut()>);
                let options = AddEventListenerOptions::new();
                options.set_passive(true);

                let window = dom::window().ok();
                if let Some(window) = &window {
                    let added = window
                        .add_event_listener_with_callback_and_add_event_listener_options(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                            &options,
                        );
                    if let Err(err) = added {
                        warn!("could not watch scrolling: {:?}", err);
                    }
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let on_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(toggle_menu(*menu_open)))
    };

    let links = props.items.iter().map(|item| {
        let onclick = {
            let menu_open = menu_open.clone();
            let href = item.href;
            Callback::from(move |e: MouseEvent| {
                menu_open.set(close_on_link(*menu_open));
                analytics::track(&AnalyticsEvent::nav(Some(href)));
                intercept_anchor_click(&e, href);
            })
        };
        html! {
            <li><a href={item.href} {onclick}>{item.label}</a></li>
        }
    });

    html! {
        <header class={classes!("site-header", (*is_scrolled).then_some("scrolled"))}>
            <div class="header-inner">
                <a class="brand" href="#top" onclick={anchor_onclick("#top".into())}>
                    {props.brand.clone()}
                </a>
                <button
                    type="button"
                    class="nav-toggle"
                    aria-controls="primary-menu"
                    aria-expanded={(*menu_open).to_string()}
                    aria-label="Toggle navigation"
                    onclick={on_toggle}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={classes!("main-nav", (*menu_open).then_some("active"))}>
                    <ul id="primary-menu">
                        { for links }
                    </ul>
                </nav>
            </div>
        </header>
    }
}
