use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod dom;
mod components {
    pub mod effects;
    pub mod gallery;
    pub mod lightbox;
    pub mod nav;
    pub mod particles;
    pub mod reveal;
    pub mod scroll_top;
    pub mod stats;
}
mod contact {
    pub mod component;
    pub mod form;
    pub mod validation;

    pub use component::ContactFormView;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

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
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Anandeshwar Events website - Making Moments Memorable | Kanpur");
    yew::Renderer::<App>::new().render();
}
