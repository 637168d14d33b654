use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::Route;

/// Four-column site footer used on the home page.
#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="page-main">
                <div class="footer-grid">
                    <div class="fade-in">
                        <div class="footer-brand">
                            <div class="logo-circle">{config::LOGO_TEXT}</div>
                            <span class="footer-brand-name">{config::SOCIETY_NAME}</span>
                        </div>
                        <p class="footer-blurb">{config::TAGLINE}</p>
                    </div>
                    <div class="fade-in">
                        <h4>{"Quick Links"}</h4>
                        <ul>
                            <li><Link<Route> to={Route::About}>{"About Us"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Events}>{"Events"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Projects}>{"Projects"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Team}>{"Team"}</Link<Route>></li>
                        </ul>
                    </div>
                    <div class="fade-in">
                        <h4>{"Resources"}</h4>
                        <ul>
                            <li><Link<Route> to={Route::Learning}>{"Learning Hub"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Community}>{"Community"}</Link<Route>></li>
                            <li><a href="#">{"Blog"}</a></li>
                            <li><a href="#">{"Newsletter"}</a></li>
                        </ul>
                    </div>
                    <div class="fade-in">
                        <h4>{"Connect"}</h4>
                        <ul>
                            <li><a href="#">{"GitHub"}</a></li>
                            <li><a href="#">{"LinkedIn"}</a></li>
                            <li><a href="#">{"Instagram"}</a></li>
                            <li><a href="#">{"Twitter"}</a></li>
                        </ul>
                    </div>
                </div>
                <div class="footer-legal">
                    <p>{format!("© {} {}. All rights reserved.", year, config::SOCIETY_NAME)}</p>
                </div>
            </div>
        </footer>
    }
}
