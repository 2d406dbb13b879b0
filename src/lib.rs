use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

pub mod config;
pub mod nav;
pub mod interactions {
    pub(crate) mod dom;
    pub mod badges;
    pub mod cards;
    pub mod footer;
    pub mod preload;
    pub mod rate_limit;
    pub mod reveal;
    pub mod scroll;
}
pub mod pages {
    pub mod landing;
}

use nav::Nav;
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
            info!("Rendering landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to landing");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
