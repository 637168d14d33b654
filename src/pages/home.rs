use yew::prelude::*;
use yew_router::components::Link;

use crate::components::footer::Footer;
use crate::components::scroll_reveal::use_scroll_reveal;
use crate::config;
use crate::Route;

struct EventPreview {
    date: &'static str,
    title: &'static str,
    description: &'static str,
    kind: &'static str,
}

const UPCOMING_EVENTS: [EventPreview; 3] = [
    EventPreview {
        date: "Feb 15",
        title: "Symposium v2.0",
        description: "AI Ethics Workshop",
        kind: "Workshop",
    },
    EventPreview {
        date: "Feb 22",
        title: "Chronus v1.0",
        description: "24-hour intensive AI Hackathon with a prizepool of 30K.",
        kind: "Hackathon",
    },
    EventPreview {
        date: "Mar 1",
        title: "Creativista v2.0",
        description: "Deep Learning for Medical Imaging - Latest Research Insights.",
        kind: "Lecture",
    },
];

struct FeaturedProject {
    title: &'static str,
    description: &'static str,
    tech: &'static [&'static str],
}

const FEATURED_PROJECTS: [FeaturedProject; 3] = [
    FeaturedProject {
        title: "AI-Powered Campus Assistant",
        description: "Chatbot helping students navigate university services and resources.",
        tech: &["NLP", "Python", "React"],
    },
    FeaturedProject {
        title: "Sustainable Energy Predictor",
        description: "ML model predicting renewable energy generation for campus optimization.",
        tech: &["TensorFlow", "Time Series", "IoT"],
    },
    FeaturedProject {
        title: "Computer Vision Art Generator",
        description: "Neural network creating artistic interpretations of campus landmarks.",
        tech: &["GANs", "PyTorch", "Computer Vision"],
    },
];

const PARTNERS: [&str; 6] = [
    "Microsoft",
    "Google AI",
    "NVIDIA",
    "OpenAI",
    "IBM Research",
    "Meta AI",
];

struct QuickStat {
    value: &'static str,
    label: &'static str,
}

const HERO_STATS: [QuickStat; 3] = [
    QuickStat { value: "500+", label: "Active Members" },
    QuickStat { value: "50+", label: "Events Hosted" },
    QuickStat { value: "25+", label: "Research Projects" },
];

const MEMBER_STATS: [QuickStat; 4] = [
    QuickStat { value: "500+", label: "Members" },
    QuickStat { value: "50+", label: "Events" },
    QuickStat { value: "25+", label: "Projects" },
    QuickStat { value: "15+", label: "Awards" },
];

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    use_scroll_reveal();

    html! {
        <div class="home-page">
            <Hero />

            <section class="section section-tinted">
                <div class="page-main">
                    <div class="section-intro fade-in">
                        <h2>{"What's Happening"}</h2>
                        <p>{"Stay up to date with our latest events, research breakthroughs, and community activities."}</p>
                    </div>
                    <div class="card-grid card-grid-3">
                        { for UPCOMING_EVENTS.iter().map(|event| html! {
                            <div class="card hover-lift fade-in">
                                <div class="card-meta">
                                    <span class="card-kind">{event.kind}</span>
                                    <span class="card-date">{event.date}</span>
                                </div>
                                <h3>{event.title}</h3>
                                <p>{event.description}</p>
                                <Link<Route> to={Route::Events} classes="card-link">
                                    {"Learn More →"}
                                </Link<Route>>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="page-main">
                    <div class="section-intro fade-in">
                        <h2>{"Featured Projects"}</h2>
                        <p>{"Discover the innovative AI projects our members are building to solve real-world problems."}</p>
                    </div>
                    <div class="card-grid card-grid-3">
                        { for FEATURED_PROJECTS.iter().map(|project| html! {
                            <div class="card hover-lift fade-in">
                                <h3>{project.title}</h3>
                                <p>{project.description}</p>
                                <div class="tag-row">
                                    { for project.tech.iter().map(|tech| html! {
                                        <span class="tag">{*tech}</span>
                                    }) }
                                </div>
                            </div>
                        }) }
                    </div>
                    <div class="section-cta fade-in">
                        <Link<Route> to={Route::Projects} classes="button-primary">
                            {"View All Projects"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section class="section section-tinted">
                <div class="page-main">
                    <div class="split-grid">
                        <div class="fade-in">
                            <h2>{"Join Our Community"}</h2>
                            <p class="lead">
                                {"Connect with like-minded students, access exclusive resources, and be part of \
                                  cutting-edge AI research and development projects."}
                            </p>
                            <ul class="perk-list">
                                <li>{"Access to exclusive workshops and seminars"}</li>
                                <li>{"Mentorship from faculty and industry experts"}</li>
                                <li>{"Opportunity to lead research projects"}</li>
                            </ul>
                            <Link<Route> to={Route::Community} classes="button-primary">
                                {"Become a Member"}
                            </Link<Route>>
                        </div>
                        <div class="fade-in">
                            <div class="stat-grid">
                                { for MEMBER_STATS.iter().map(|stat| html! {
                                    <div class="card stat-card hover-lift">
                                        <div class="stat-value">{stat.value}</div>
                                        <div class="stat-label">{stat.label}</div>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="page-main">
                    <div class="section-intro fade-in">
                        <h2>{"Our Partners"}</h2>
                        <p>{"We're proud to collaborate with leading technology companies and research institutions."}</p>
                    </div>
                    <div class="card-grid card-grid-6">
                        { for PARTNERS.iter().map(|partner| html! {
                            <div class="card partner-card hover-lift fade-in">
                                <div class="partner-name">{*partner}</div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <Footer />
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="page-main hero-content">
                <div class="fade-in">
                    <div class="logo-circle logo-circle-large">{config::LOGO_TEXT}</div>
                </div>

                <div class="fade-in">
                    <h1>
                        {"Where Intelligence Meets "}
                        <span class="text-gradient">{"Innovation"}</span>
                    </h1>
                </div>

                <div class="fade-in">
                    <p class="hero-subtitle">
                        {"Empowering the next generation of AI innovators through cutting-edge research, \
                          collaborative learning, and transformative projects that shape the future."}
                    </p>
                </div>

                <div class="fade-in">
                    <div class="hero-cta-group">
                        <Link<Route> to={Route::Community} classes="button-primary">
                            {"Join Our Community"}
                        </Link<Route>>
                        <Link<Route> to={Route::Events} classes="button-secondary">
                            {"Explore Events"}
                        </Link<Route>>
                    </div>
                </div>

                <div class="fade-in">
                    <div class="card-grid card-grid-3 hero-stats">
                        { for HERO_STATS.iter().map(|stat| html! {
                            <div class="card stat-card hover-lift">
                                <div class="stat-value">{stat.value}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
