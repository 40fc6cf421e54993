use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod error;
mod motion {
    //! Declarative entrance/exit transitions.
    //!
    //! An [`AnimationSpec`] describes where an element starts, where it ends and
    //! how it gets there. [`Playback`] decides which of those states the element
    //! is rendered at, driven by mount, viewport and exit events.

    pub mod playback;
    pub mod presets;
    pub mod spec;
    pub mod viewport;

    pub use playback::{Playback, PlaybackEvent};
    pub use spec::{AnimationSpec, Easing, Trigger};
    pub use viewport::ViewportWatch;
}
mod state {
    pub mod carousel;
    pub mod menu;
    pub mod scroll;

    pub use carousel::Carousel;
    pub use menu::{MenuAction, MenuState};
    pub use scroll::use_scroll_state;
}
mod components {
    pub mod motion;
    pub mod nav;
    pub mod presence;
    pub mod whatsapp;
}
mod sections {
    pub mod academy;
    pub mod contact;
    pub mod hero;
    pub mod pricing;
    pub mod services;
    pub mod testimonials;
}
mod pages {
    pub mod landing;
}

use components::nav::Nav;
use content::{SiteContent, VariantKind};
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/classic")]
    Classic,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing variant={VariantKind::Full} /> }
        }
        Route::Classic => {
            info!("Rendering Classic page");
            html! { <Landing variant={VariantKind::Classic} /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let content = use_state(|| Rc::new(SiteContent::bundled()));

    html! {
        <ContextProvider<Rc<SiteContent>> context={(*content).clone()}>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<SiteContent>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_recognize_variants() {
        assert!(Route::recognize("/") == Some(Route::Home));
        assert!(Route::recognize("/classic") == Some(Route::Classic));
        assert!(Route::not_found_route() == Some(Route::NotFound));
    }
}
