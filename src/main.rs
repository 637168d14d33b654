use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod reveal;
mod components {
    pub mod avatar;
    pub mod counter;
    pub mod footer;
    pub mod loading;
    pub mod scroll_reveal;
}
mod pages {
    pub mod about;
    pub mod community;
    pub mod events;
    pub mod home;
    pub mod learning;
    pub mod not_found;
    pub mod projects;
    pub mod team;
}

use pages::{
    about::About, community::Community, events::Events, home::Home, learning::Learning,
    not_found::NotFound, projects::Projects, team::Team,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/events")]
    Events,
    #[at("/projects")]
    Projects,
    #[at("/team")]
    Team,
    #[at("/community")]
    Community,
    #[at("/learning")]
    Learning,
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
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Events => {
            info!("Rendering Events page");
            html! { <Events /> }
        }
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <Projects /> }
        }
        Route::Team => {
            info!("Rendering Team page");
            html! { <Team /> }
        }
        Route::Community => {
            info!("Rendering Community page");
            html! { <Community /> }
        }
        Route::Learning => {
            info!("Rendering Learning page");
            html! { <Learning /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

const NAV_ITEMS: [(Route, &str); 7] = [
    (Route::Home, "Home"),
    (Route::About, "About"),
    (Route::Events, "Events"),
    (Route::Projects, "Projects"),
    (Route::Learning, "Learning"),
    (Route::Team, "Team"),
    (Route::Community, "Community"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let current = use_route::<Route>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 40);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <div class="logo-circle">{config::LOGO_TEXT}</div>
                    <span>{config::SOCIETY_NAME}</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_ITEMS.iter().map(|(route, label)| {
                        let active = current.as_ref() == Some(route);
                        html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route>
                                    to={route.clone()}
                                    classes={classes!("nav-link", active.then(|| "active"))}
                                >
                                    {*label}
                                </Link<Route>>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
