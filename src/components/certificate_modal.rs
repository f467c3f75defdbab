use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::dom;

pub type ModalHandle = UseReducerHandle<ModalState>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Certificate {
    pub src: String,
    pub title: String,
}

impl Certificate {
    /// A trigger without a certificate source does not open anything.
    pub fn from_parts(src: Option<String>, heading: Option<String>) -> Option<Self> {
        let src = src.filter(|src| !src.trim().is_empty())?;
        let title = heading
            .map(|heading| heading.trim().to_string())
            .filter(|heading| !heading.is_empty())
            .unwrap_or_else(|| config::DEFAULT_CERTIFICATE_TITLE.to_string());
        Some(Self { src, title })
    }
}

/// Reads `data-cert` from a `.certificate-img` and the heading of its figure.
fn certificate_from_image(img: &Element) -> Option<Certificate> {
    let figure = img.closest("figure").ok().flatten()?;
    let heading = figure
        .query_selector("h3")
        .ok()
        .flatten()
        .and_then(|h3| h3.text_content());
    Certificate::from_parts(img.get_attribute("data-cert"), heading)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    Button,
    Backdrop,
    Escape,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(Certificate),
}

pub enum ModalAction {
    Open(Certificate),
    Close(CloseTrigger),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn certificate(&self) -> Option<&Certificate> {
        match self {
            ModalState::Open(certificate) => Some(certificate),
            ModalState::Closed => None,
        }
    }

    /// Inline `overflow` for `<body>`: locked while open, cleared otherwise.
    pub fn body_overflow(&self) -> &'static str {
        if self.is_open() {
            "hidden"
        } else {
            ""
        }
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ModalAction::Open(certificate) => {
                debug!("opening certificate \"{}\"", certificate.title);
                Rc::new(ModalState::Open(certificate))
            }
            ModalAction::Close(trigger) => {
                if !self.is_open() {
                    return self;
                }
                debug!("closing certificate modal ({:?})", trigger);
                Rc::new(ModalState::Closed)
            }
        }
    }
}

/// Index to move focus to when Tab would leave the modal, `None` to let the
/// browser handle the key. Focus on the dialog itself (or anywhere outside
/// the list) enters the list at the end matching the key direction.
pub fn focus_wrap(position: Option<usize>, len: usize, backwards: bool) -> Option<usize> {
    let last = len.checked_sub(1)?;
    match (position, backwards) {
        (None, true) => Some(last),
        (None, false) => Some(0),
        (Some(0), true) => Some(last),
        (Some(pos), false) if pos == last => Some(0),
        _ => None,
    }
}

fn trap_focus(overlay: &NodeRef, e: &KeyboardEvent) {
    let Some(root) = overlay.cast::<Element>() else {
        return;
    };
    let Ok(nodes) = root.query_selector_all(config::MODAL_FOCUSABLE_SELECTOR) else {
        return;
    };
    let focusable: Vec<HtmlElement> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect();
    let active = dom::document().ok().and_then(|document| document.active_element());
    let position = active.and_then(|active| {
        focusable
            .iter()
            .position(|el| AsRef::<Element>::as_ref(el) == &active)
    });

    if let Some(target) = focus_wrap(position, focusable.len(), e.shift_key())
        .and_then(|next| focusable.get(next))
    {
        e.prevent_default();
        let _ = target.focus();
    }
}

#[derive(Properties, PartialEq)]
pub struct CertificateFigureProps {
    pub title: AttrValue,
    pub thumbnail: AttrValue,
    #[prop_or_default]
    pub certificate: Option<AttrValue>,
    #[prop_or_default]
    pub caption: Option<AttrValue>,
}

/// Achievement card whose image and "view" button open the modal.
#[function_component(CertificateFigure)]
pub fn certificate_figure(props: &CertificateFigureProps) -> Html {
    let modal = use_context::<ModalHandle>();
    let image = use_node_ref();

    let open = {
        let image = image.clone();
        Callback::from(move |_: ()| {
            let Some(modal) = modal.as_ref() else {
                return;
            };
            match image.cast::<Element>().and_then(|img| certificate_from_image(&img)) {
                Some(certificate) => modal.dispatch(ModalAction::Open(certificate)),
                None => debug!("certificate trigger has nothing to show"),
            }
        })
    };

    let on_image = open.reform(|_: MouseEvent| ());
    let on_view = open.reform(|e: MouseEvent| e.stop_propagation());

    html! {
        <figure class="achievement-card">
            <div class="achievement-image-wrapper">
                <img
                    ref={image}
                    class="certificate-img"
                    src={props.thumbnail.clone()}
                    alt={props.title.clone()}
                    data-cert={props.certificate.clone()}
                    loading="lazy"
                    onclick={on_image}
                />
                if props.certificate.is_some() {
                    <button type="button" class="view-certificate-btn" onclick={on_view}>
                        {"View certificate"}
                    </button>
                }
            </div>
            <figcaption>
                <h3>{props.title.clone()}</h3>
                if let Some(caption) = props.caption.clone() {
                    <p>{caption}</p>
                }
            </figcaption>
        </figure>
    }
}

#[function_component(CertificateModal)]
pub fn certificate_modal() -> Html {
    let modal = use_context::<ModalHandle>();
    let overlay = use_node_ref();
    let overflow = modal.as_ref().map_or("", |modal| modal.body_overflow());

    // Scroll lock, plus focus handed to the dialog once it is painted.
    {
        let overlay = overlay.clone();
        use_effect_with_deps(
            move |overflow: &&'static str| {
                let locked = !overflow.is_empty();
                if let Err(err) = dom::set_body_overflow(overflow) {
                    warn!("could not update body scroll lock: {}", err);
                }
                let focus = locked.then(|| {
                    Timeout::new(0, move || {
                        if let Some(dialog) = overlay.cast::<HtmlElement>() {
                            let _ = dialog.focus();
                        }
                    })
                });
                move || {
                    drop(focus);
                    if locked {
                        let _ = dom::set_body_overflow("");
                    }
                }
            },
            overflow,
        );
    }

    {
        let modal = modal.clone();
        let overlay = overlay.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            let Some(modal) = modal.as_ref().filter(|modal| modal.is_open()) else {
                return;
            };
            match e.key().as_str() {
                "Escape" => modal.dispatch(ModalAction::Close(CloseTrigger::Escape)),
                "Tab" => trap_focus(&overlay, &e),
                _ => {}
            }
        });
    }

    let Some(modal) = modal else {
        warn!("certificate modal rendered without a modal provider");
        return html! {};
    };

    let close = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| {
            modal.dispatch(ModalAction::Close(CloseTrigger::Button))
        })
    };
    let on_backdrop = {
        let modal = modal.clone();
        let overlay = overlay.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target().is_some() && e.target() == overlay.get().map(EventTarget::from) {
                modal.dispatch(ModalAction::Close(CloseTrigger::Backdrop));
            }
        })
    };

    let is_open = modal.is_open();
    let (src, title) = modal
        .certificate()
        .map(|certificate| (certificate.src.clone(), certificate.title.clone()))
        .unwrap_or_default();

    html! {
        <div
            id="certificate-modal"
            class="modal"
            ref={overlay}
            role="dialog"
            aria-modal="true"
            aria-labelledby="modal-certificate-title"
            aria-hidden={(!is_open).to_string()}
            tabindex="-1"
            style={if is_open { "display: flex;" } else { "display: none;" }}
            onclick={on_backdrop}
        >
            <div class="modal-content">
                <button
                    type="button"
                    class="close-modal"
                    aria-label="Close certificate"
                    onclick={close}
                >
                    {"×"}
                </button>
                <img id="modal-certificate-img" src={src} alt={title.clone()} />
                <h3 id="modal-certificate-title">{title}</h3>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn certificate() -> Certificate {
        Certificate {
            src: "/assets/certs/regional-finals.jpg".to_string(),
            title: "Regional Finals".to_string(),
        }
    }

    #[test]
    fn missing_or_blank_source_opens_nothing() {
        assert_eq!(Certificate::from_parts(None, Some("Award".into())), None);
        assert_eq!(Certificate::from_parts(Some("  ".into()), Some("Award".into())), None);
    }

    #[test]
    fn title_falls_back_to_default() {
        let cert = Certificate::from_parts(Some("/c.jpg".into()), None).unwrap();
        assert_eq!(cert.title, "Certificate");
        let cert = Certificate::from_parts(Some("/c.jpg".into()), Some("\n  ".into())).unwrap();
        assert_eq!(cert.title, "Certificate");
        let cert =
            Certificate::from_parts(Some("/c.jpg".into()), Some(" Gold Medal ".into())).unwrap();
        assert_eq!(cert.title, "Gold Medal");
    }

    #[test]
    fn opening_locks_scroll_and_every_close_unlocks() {
        for trigger in [CloseTrigger::Button, CloseTrigger::Backdrop, CloseTrigger::Escape] {
            let open = Rc::new(ModalState::Closed).reduce(ModalAction::Open(certificate()));
            assert!(open.is_open());
            assert_eq!(open.body_overflow(), "hidden");

            let closed = open.reduce(ModalAction::Close(trigger));
            assert!(!closed.is_open());
            assert_eq!(closed.body_overflow(), "");
        }
    }

    #[test]
    fn reopening_replaces_the_certificate() {
        let other = Certificate {
            src: "/assets/certs/hackathon.jpg".to_string(),
            title: "Hackathon".to_string(),
        };
        let state = Rc::new(ModalState::Closed)
            .reduce(ModalAction::Open(certificate()))
            .reduce(ModalAction::Open(other.clone()));
        assert_eq!(state.certificate(), Some(&other));
    }

    #[test]
    fn closing_a_closed_modal_is_a_no_op() {
        let closed = Rc::new(ModalState::Closed);
        let after = closed.clone().reduce(ModalAction::Close(CloseTrigger::Escape));
        assert!(Rc::ptr_eq(&closed, &after));
    }

    #[test]
    fn tab_wraps_from_last_to_first() {
        assert_eq!(focus_wrap(Some(2), 3, false), Some(0));
        assert_eq!(focus_wrap(Some(1), 3, false), None);
    }

    #[test]
    fn shift_tab_wraps_from_first_to_last() {
        assert_eq!(focus_wrap(Some(0), 3, true), Some(2));
        assert_eq!(focus_wrap(Some(2), 3, true), None);
    }

    #[test]
    fn focus_on_the_dialog_enters_the_list() {
        // After opening, focus sits on the overlay, which is not in the list.
        assert_eq!(focus_wrap(None, 3, false), Some(0));
        assert_eq!(focus_wrap(None, 3, true), Some(2));
    }

    #[test]
    fn empty_list_is_left_alone() {
        assert_eq!(focus_wrap(Some(0), 0, true), None);
        assert_eq!(focus_wrap(None, 0, false), None);
    }
}
