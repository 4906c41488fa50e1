use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod links;
mod navigation;
mod theme;
mod whatsapp_float;
mod animation {
    pub mod options;
    pub mod plugin;
    pub mod reveal;
    pub mod viewport;
}
mod gallery {
    pub mod items;
    pub mod lightbox;
    pub mod scroll_lock;
    pub mod section;
}
mod booking {
    pub mod form;
    pub mod model;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod drivers;
    pub mod footer;
    pub mod hero;
    pub mod services;
    pub mod why_us;
}
mod pages {
    pub mod home;
    pub mod legal;
}

use pages::{
    home::Home,
    legal::{CookieNotice, PrivacyPolicy, TermsOfUse, ThankYou},
};
use theme::Theme;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy-policy")]
    Privacy,
    #[at("/cookie-notice")]
    CookieNotice,
    #[at("/terms-of-use")]
    Terms,
    #[at("/thank-you")]
    ThankYou,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::CookieNotice => {
            info!("Rendering Cookie Notice page");
            html! { <CookieNotice /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfUse /> }
        }
        Route::ThankYou => {
            info!("Rendering Thank You page");
            html! { <ThankYou /> }
        }
        Route::NotFound => {
            info!("Unknown route, falling back to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Theme />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    animation::plugin::register();
    yew::Renderer::<App>::new().render();
}
