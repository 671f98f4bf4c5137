use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod contact;
mod animation {
    pub mod visibility;
    pub mod counter;
    pub mod carousel;
}
mod components {
    pub mod nav;
    pub mod reveal;
    pub mod stats_counter;
    pub mod project_card;
    pub mod contact_form;
    pub mod whatsapp;
}
mod pages {
    pub mod landing;
}

use components::{nav::Nav, whatsapp::WhatsAppButton};
use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <WhatsAppButton />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::get_log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
