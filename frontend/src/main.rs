use yew::prelude::*;
use log::info;

mod config;
mod content;
mod flow;
mod signup;
mod components {
    pub mod card;
    pub mod icon;
    pub mod toast;
}
mod pages {
    pub mod landing;
}

use components::toast::ToastProvider;
use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    html! {
        <ToastProvider>
            <Landing />
        </ToastProvider>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
