use chrono::NaiveDate;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::scroll_reveal::use_scroll_reveal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProjectCategory {
    Nlp,
    ComputerVision,
    MachineLearning,
    Healthcare,
    Education,
    Optimization,
}

impl ProjectCategory {
    const ALL: [ProjectCategory; 6] = [
        ProjectCategory::Nlp,
        ProjectCategory::ComputerVision,
        ProjectCategory::MachineLearning,
        ProjectCategory::Healthcare,
        ProjectCategory::Education,
        ProjectCategory::Optimization,
    ];

    fn value(self) -> &'static str {
        match self {
            ProjectCategory::Nlp => "nlp",
            ProjectCategory::ComputerVision => "cv",
            ProjectCategory::MachineLearning => "ml",
            ProjectCategory::Healthcare => "healthcare",
            ProjectCategory::Education => "education",
            ProjectCategory::Optimization => "optimization",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ProjectCategory::Nlp => "Natural Language Processing",
            ProjectCategory::ComputerVision => "Computer Vision",
            ProjectCategory::MachineLearning => "Machine Learning",
            ProjectCategory::Healthcare => "Healthcare AI",
            ProjectCategory::Education => "Educational AI",
            ProjectCategory::Optimization => "Optimization",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProjectStatus {
    InProgress,
    Testing,
    BetaTesting,
    PublicationReady,
}

impl ProjectStatus {
    fn label(self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Testing => "Testing",
            ProjectStatus::BetaTesting => "Beta Testing",
            ProjectStatus::PublicationReady => "Publication Ready",
        }
    }

    fn badge_class(self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "badge badge-blue",
            ProjectStatus::Testing => "badge badge-yellow",
            ProjectStatus::BetaTesting => "badge badge-orange",
            ProjectStatus::PublicationReady => "badge badge-green",
        }
    }
}

struct OngoingProject {
    title: &'static str,
    description: &'static str,
    category: ProjectCategory,
    technologies: &'static [&'static str],
    team_size: u32,
    start_date: &'static str,
    status: ProjectStatus,
    progress: u32,
    github: &'static str,
    demo: Option<&'static str>,
    lead: &'static str,
}

const ONGOING_PROJECTS: [OngoingProject; 6] = [
    OngoingProject {
        title: "AI-Powered Campus Assistant",
        description: "Intelligent chatbot helping students navigate university services, course registration, and academic resources using natural language processing and knowledge graphs.",
        category: ProjectCategory::Nlp,
        technologies: &["Python", "NLP", "React", "MongoDB", "FastAPI"],
        team_size: 6,
        start_date: "2024-01-15",
        status: ProjectStatus::InProgress,
        progress: 70,
        github: "https://github.com/ai-society/campus-assistant",
        demo: Some("https://campus-ai.demo.com"),
        lead: "Sarah Chen",
    },
    OngoingProject {
        title: "Sustainable Energy Predictor",
        description: "Machine learning model predicting renewable energy generation patterns for campus optimization using IoT sensors and weather data integration.",
        category: ProjectCategory::MachineLearning,
        technologies: &["TensorFlow", "Python", "IoT", "Time Series Analysis", "Docker"],
        team_size: 4,
        start_date: "2023-11-20",
        status: ProjectStatus::Testing,
        progress: 85,
        github: "https://github.com/ai-society/energy-predictor",
        demo: Some("https://energy-predict.demo.com"),
        lead: "Michael Rodriguez",
    },
    OngoingProject {
        title: "Computer Vision Art Generator",
        description: "Neural network creating artistic interpretations of campus landmarks using generative adversarial networks and style transfer techniques.",
        category: ProjectCategory::ComputerVision,
        technologies: &["PyTorch", "GANs", "Computer Vision", "Style Transfer", "Flask"],
        team_size: 5,
        start_date: "2024-02-01",
        status: ProjectStatus::InProgress,
        progress: 45,
        github: "https://github.com/ai-society/art-generator",
        demo: None,
        lead: "Emily Zhang",
    },
    OngoingProject {
        title: "Medical Image Analysis Tool",
        description: "Deep learning application for automated detection of anomalies in medical imaging, supporting radiologists in diagnostic processes.",
        category: ProjectCategory::Healthcare,
        technologies: &["TensorFlow", "Medical Imaging", "CNN", "Python", "DICOM"],
        team_size: 7,
        start_date: "2023-09-10",
        status: ProjectStatus::PublicationReady,
        progress: 95,
        github: "https://github.com/ai-society/medical-imaging",
        demo: Some("https://medical-ai.demo.com"),
        lead: "David Kim",
    },
    OngoingProject {
        title: "Smart Traffic Optimization",
        description: "AI system optimizing campus traffic flow using real-time data analysis and predictive modeling to reduce congestion and improve safety.",
        category: ProjectCategory::Optimization,
        technologies: &["Reinforcement Learning", "Python", "OpenCV", "Real-time Analytics"],
        team_size: 8,
        start_date: "2024-01-05",
        status: ProjectStatus::InProgress,
        progress: 60,
        github: "https://github.com/ai-society/traffic-optimizer",
        demo: None,
        lead: "Lisa Thompson",
    },
    OngoingProject {
        title: "Language Learning Companion",
        description: "Personalized AI tutor for language learning using speech recognition, natural language generation, and adaptive learning algorithms.",
        category: ProjectCategory::Education,
        technologies: &["Speech Recognition", "NLP", "Adaptive Learning", "React Native"],
        team_size: 5,
        start_date: "2023-12-01",
        status: ProjectStatus::BetaTesting,
        progress: 80,
        github: "https://github.com/ai-society/language-companion",
        demo: Some("https://lang-ai.demo.com"),
        lead: "Alex Johnson",
    },
];

struct CompletedProject {
    title: &'static str,
    description: &'static str,
    achievements: &'static [&'static str],
    technologies: &'static [&'static str],
    completed_date: &'static str,
}

const COMPLETED_PROJECTS: [CompletedProject; 3] = [
    CompletedProject {
        title: "Student Performance Predictor",
        description: "ML model predicting student success rates using academic and behavioral data.",
        achievements: &["Published in IEEE Conference", "Best Student Paper Award"],
        technologies: &["Scikit-learn", "Pandas", "Jupyter"],
        completed_date: "2023-12-15",
    },
    CompletedProject {
        title: "Automated Essay Scoring",
        description: "NLP system for automated evaluation of student essays with detailed feedback.",
        achievements: &["Deployed in 3 courses", "95% accuracy rate"],
        technologies: &["BERT", "Transformers", "Python"],
        completed_date: "2023-10-20",
    },
    CompletedProject {
        title: "COVID-19 Spread Predictor",
        description: "Epidemiological model for predicting virus spread patterns on campus.",
        achievements: &["Used by university administration", "Featured in local news"],
        technologies: &["SIR Models", "Data Visualization", "R"],
        completed_date: "2023-08-10",
    },
];

fn short_date(iso: &str) -> String {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|date| date.format("%b %e, %Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

#[function_component(Projects)]
pub fn projects() -> Html {
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

    let search_term = use_state(String::new);
    let filter = use_state(|| None::<ProjectCategory>);

    let on_search_input = {
        let search_term = search_term.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search_term.set(input.value());
        })
    };

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            filter.set(ProjectCategory::parse(&select.value()));
        })
    };

    let needle = search_term.to_lowercase();
    let filtered: Vec<&OngoingProject> = ONGOING_PROJECTS
        .iter()
        .filter(|project| {
            let matches_search = needle.is_empty()
                || project.title.to_lowercase().contains(&needle)
                || project.description.to_lowercase().contains(&needle);
            let matches_filter = filter.map_or(true, |category| project.category == category);
            matches_search && matches_filter
        })
        .collect();

    html! {
        <div class="projects-page">
            <section class="page-hero">
                <div class="page-main">
                    <h1 class="fade-in">{"Research & Projects"}</h1>
                    <p class="fade-in">
                        {"Discover the innovative AI projects our community is building to solve \
                          real-world problems and advance the field of artificial intelligence."}
                    </p>
                </div>
            </section>

            <section class="section section-tinted toolbar-section">
                <div class="page-main">
                    <div class="section-toolbar">
                        <input
                            class="search-input fade-in"
                            type="text"
                            placeholder="Search projects..."
                            value={(*search_term).clone()}
                            oninput={on_search_input}
                        />
                        <div class="filter-control fade-in">
                            <label for="project-filter">{"Filter"}</label>
                            <select id="project-filter" onchange={on_filter_change}>
                                <option value="all" selected={filter.is_none()}>{"All Projects"}</option>
                                { for ProjectCategory::ALL.iter().map(|category| html! {
                                    <option
                                        value={category.value()}
                                        selected={*filter == Some(*category)}
                                    >
                                        {category.label()}
                                    </option>
                                }) }
                            </select>
                        </div>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="page-main">
                    <h2 class="section-title fade-in">
                        {format!("Ongoing Projects ({})", filtered.len())}
                    </h2>

                    <div class="card-grid card-grid-2 fade-in">
                        { for filtered.iter().map(|project| html! {
                            <div class="card hover-lift">
                                <div class="card-meta">
                                    <span class={project.status.badge_class()}>{project.status.label()}</span>
                                    <div class="link-row">
                                        <a href={project.github}>{"GitHub"}</a>
                                        {
                                            match project.demo {
                                                Some(demo) => html! { <a href={demo}>{"Demo"}</a> },
                                                None => html! {},
                                            }
                                        }
                                    </div>
                                </div>

                                <h3>{project.title}</h3>
                                <p>{project.description}</p>

                                <ul class="detail-list">
                                    <li>{format!("Team Lead: {} • {} members", project.lead, project.team_size)}</li>
                                    <li>{format!("Started: {}", short_date(project.start_date))}</li>
                                </ul>

                                <div class="progress-block">
                                    <div class="progress-labels">
                                        <span>{"Progress"}</span>
                                        <span>{format!("{}%", project.progress)}</span>
                                    </div>
                                    <div class="progress-track">
                                        <div
                                            class="progress-fill"
                                            style={format!("width: {}%;", project.progress)}
                                        ></div>
                                    </div>
                                </div>

                                <div class="tag-row">
                                    { for project.technologies.iter().map(|tech| html! {
                                        <span class="tag">{*tech}</span>
                                    }) }
                                </div>
                            </div>
                        }) }
                    </div>

                    {
                        if filtered.is_empty() {
                            html! {
                                <div class="empty-state">
                                    <h3>{"No projects found"}</h3>
                                    <p>{"Try adjusting your search or filter criteria."}</p>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </section>

            <section class="section section-tinted">
                <div class="page-main">
                    <h2 class="section-title fade-in">{"Completed Projects & Achievements"}</h2>
                    <div class="card-grid card-grid-3">
                        { for COMPLETED_PROJECTS.iter().map(|project| html! {
                            <div class="card hover-lift fade-in">
                                <h3>{project.title}</h3>
                                <p>{project.description}</p>
                                <ul class="achievement-list">
                                    { for project.achievements.iter().map(|achievement| html! {
                                        <li>{*achievement}</li>
                                    }) }
                                </ul>
                                <div class="tag-row">
                                    { for project.technologies.iter().map(|tech| html! {
                                        <span class="tag tag-small">{*tech}</span>
                                    }) }
                                </div>
                                <p class="muted">
                                    {format!("Completed: {}", short_date(project.completed_date))}
                                </p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section cta-banner">
                <div class="page-main">
                    <h2 class="fade-in">{"Have a Project Idea?"}</h2>
                    <p class="fade-in">
                        {"Join our community and turn your AI ideas into reality. We provide mentorship, \
                          resources, and a collaborative environment to bring your projects to life."}
                    </p>
                    <div class="hero-cta-group fade-in">
                        <button class="button-secondary">{"Submit Project Proposal"}</button>
                        <button class="button-secondary">{"Join Existing Project"}</button>
                    </div>
                </div>
            </section>
        </div>
    }
}
