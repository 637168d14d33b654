use yew::prelude::*;

use crate::config;

/// Skeleton screen mirroring the team page layout while its content mounts:
/// hero placeholder, section header bars, then a grid of pulsing card
/// shells.
#[function_component(TeamLoading)]
pub fn team_loading() -> Html {
    html! {
        <div class="team-skeleton">
            <section class="skeleton-hero">
                <div class="logo-circle logo-circle-large pulse">{config::LOGO_TEXT}</div>
                <div class="skeleton-bar skeleton-title pulse"></div>
                <div class="skeleton-bar skeleton-subtitle pulse"></div>
            </section>

            <main class="page-main">
                <div class="skeleton-section-header">
                    <div class="skeleton-bar skeleton-heading pulse"></div>
                    <div class="skeleton-bar skeleton-caption pulse"></div>
                    <div class="skeleton-rule"></div>
                </div>

                <div class="card-grid card-grid-4">
                    { for (0..8).map(|_| html! {
                        <div class="card skeleton-card pulse">
                            <div class="skeleton-avatar pulse"></div>
                            <div class="skeleton-bar skeleton-name pulse"></div>
                            <div class="skeleton-bar skeleton-role pulse"></div>
                            <div class="skeleton-bar skeleton-line pulse"></div>
                            <div class="skeleton-bar skeleton-line-short pulse"></div>
                        </div>
                    }) }
                </div>

                <div class="loading-dots loading-dots-row">
                    <span class="dot dot-1"></span>
                    <span class="dot dot-2"></span>
                    <span class="dot dot-3"></span>
                    <span class="loading-text">{"Loading team members..."}</span>
                </div>
            </main>
        </div>
    }
}
