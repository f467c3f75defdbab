use log::info;
use yew::prelude::*;

mod analytics;
mod config;
mod content;
mod dom;
mod components {
    pub mod carousel;
    pub mod certificate_modal;
    pub mod feature_button;
    pub mod site_header;
    pub mod smooth_scroll;
}
mod pages {
    pub mod home;
}

use components::{
    certificate_modal::{CertificateModal, ModalHandle, ModalState},
    site_header::SiteHeader,
};
use pages::home::Home;

#[function_component]
fn App() -> Html {
    // One modal for the whole page; figures open it, the achievements
    // carousel watches it.
    let modal = use_reducer(ModalState::default);

    html! {
        <ContextProvider<ModalHandle> context={modal}>
            <SiteHeader brand={content::BRAND} items={content::NAV_ITEMS} />
            <Home />
            <CertificateModal />
        </ContextProvider<ModalHandle>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting showcase frontend");
    yew::Renderer::<App>::new().render();
}
