use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <div class="not-found-panel">
                <h1>{"404"}</h1>
                <p>{"The page you're looking for doesn't exist or has been moved."}</p>
                <Link<Route> to={Route::Home} classes="button-primary">
                    {"Back to Home"}
                </Link<Route>>
            </div>
        </div>
    }
}
