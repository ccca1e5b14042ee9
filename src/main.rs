use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod scroll {
    pub mod controller;
    pub mod dom;
    pub mod nav_state;
    pub mod progress;
    pub mod reveal;
    pub mod sections;
}
mod components {
    pub mod floating_nav;
    pub mod footer;
    pub mod progress_bar;
    pub mod toast;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod hero;
    pub mod projects;
    pub mod skills;
}
mod pages {
    pub mod not_found;
    pub mod portfolio;
}

use pages::{not_found::NotFound, portfolio::Portfolio};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Portfolio,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
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
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
