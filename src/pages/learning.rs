use yew::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::scroll_reveal::use_scroll_reveal;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    fn label(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

struct Course {
    title: &'static str,
    provider: &'static str,
    level: Level,
    duration: &'static str,
    rating: &'static str,
    tags: &'static [&'static str],
}

const COURSES: [Course; 3] = [
    Course {
        title: "Machine Learning Fundamentals",
        provider: "Stanford Online",
        level: Level::Beginner,
        duration: "8 weeks",
        rating: "4.8",
        tags: &["ML", "Python"],
    },
    Course {
        title: "Deep Learning Specialization",
        provider: "Coursera",
        level: Level::Intermediate,
        duration: "16 weeks",
        rating: "4.9",
        tags: &["Deep Learning", "Neural Networks"],
    },
    Course {
        title: "Natural Language Processing",
        provider: "Hugging Face",
        level: Level::Advanced,
        duration: "12 weeks",
        rating: "4.7",
        tags: &["NLP", "Transformers"],
    },
];

struct Tutorial {
    title: &'static str,
    author: &'static str,
    difficulty: Level,
    duration: &'static str,
    tags: &'static [&'static str],
}

const TUTORIALS: [Tutorial; 3] = [
    Tutorial {
        title: "Building Your First Neural Network",
        author: "AI Society",
        difficulty: Level::Beginner,
        duration: "45 min",
        tags: &["Tutorial", "Hands-on"],
    },
    Tutorial {
        title: "Computer Vision with PyTorch",
        author: "Vision Lab",
        difficulty: Level::Intermediate,
        duration: "2 hours",
        tags: &["CV", "PyTorch"],
    },
    Tutorial {
        title: "Deploying ML Models to Production",
        author: "MLOps Team",
        difficulty: Level::Advanced,
        duration: "3 hours",
        tags: &["MLOps", "Deployment"],
    },
];

struct Resource {
    title: &'static str,
    kind: &'static str,
    description: &'static str,
}

const RESOURCES: [Resource; 3] = [
    Resource {
        title: "AI Research Papers Database",
        kind: "Database",
        description: "Curated collection of must-read AI papers",
    },
    Resource {
        title: "ML Cheat Sheets Collection",
        kind: "Reference",
        description: "Quick reference guides for algorithms and concepts",
    },
    Resource {
        title: "Dataset Repository",
        kind: "Data",
        description: "High-quality datasets for practice projects",
    },
];

struct Workshop {
    title: &'static str,
    date: &'static str,
    instructor: &'static str,
    duration: &'static str,
    level: Level,
    spots: u32,
}

const WORKSHOPS: [Workshop; 2] = [
    Workshop {
        title: "Introduction to Transformers",
        date: "2025-09-15",
        instructor: "Dr. Sarah Chen",
        duration: "3 hours",
        level: Level::Intermediate,
        spots: 25,
    },
    Workshop {
        title: "Computer Vision Bootcamp",
        date: "2025-09-22",
        instructor: "Prof. Michael Zhang",
        duration: "6 hours",
        level: Level::Beginner,
        spots: 30,
    },
];

struct StudyGroup {
    name: &'static str,
    members: u32,
    focus: &'static str,
    schedule: &'static str,
}

const STUDY_GROUPS: [StudyGroup; 2] = [
    StudyGroup {
        name: "Deep Learning Study Circle",
        members: 12,
        focus: "Neural Networks & Backpropagation",
        schedule: "Tuesdays 7 PM",
    },
    StudyGroup {
        name: "NLP Research Group",
        members: 8,
        focus: "Latest NLP Papers Discussion",
        schedule: "Fridays 6 PM",
    },
];

struct Tool {
    name: &'static str,
    category: &'static str,
    description: &'static str,
}

const TOOLS: [Tool; 3] = [
    Tool {
        name: "TensorFlow",
        category: "Framework",
        description: "End-to-end ML platform",
    },
    Tool {
        name: "Jupyter Notebooks",
        category: "Environment",
        description: "Interactive computing environment",
    },
    Tool {
        name: "Weights & Biases",
        category: "MLOps",
        description: "Experiment tracking and visualization",
    },
];

struct Book {
    title: &'static str,
    author: &'static str,
    level: Level,
    rating: &'static str,
}

const BOOKS: [Book; 2] = [
    Book {
        title: "Pattern Recognition and Machine Learning",
        author: "Christopher Bishop",
        level: Level::Advanced,
        rating: "4.6",
    },
    Book {
        title: "Hands-On Machine Learning",
        author: "Aurélien Géron",
        level: Level::Intermediate,
        rating: "4.8",
    },
];

#[derive(Properties, PartialEq)]
struct HubSectionHeaderProps {
    title: String,
    subtitle: String,
    #[prop_or_default]
    actions: Html,
}

#[function_component(HubSectionHeader)]
fn hub_section_header(props: &HubSectionHeaderProps) -> Html {
    html! {
        <header class="section-header fade-in">
            <div class="section-header-row">
                <div>
                    <h2 class="text-gradient">{&props.title}</h2>
                    <p class="section-subtitle">{&props.subtitle}</p>
                </div>
                {props.actions.clone()}
            </div>
            <div class="gradient-rule"></div>
        </header>
    }
}

#[function_component(Learning)]
pub fn learning() -> Html {
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

    // None shows every course.
    let level_filter = use_state(|| None::<Level>);

    let filtered_courses: Vec<&Course> = COURSES
        .iter()
        .filter(|course| level_filter.map_or(true, |level| course.level == level))
        .collect();

    let level_tags = {
        let level_filter = level_filter.clone();
        let all_active = level_filter.is_none();
        let clear = {
            let level_filter = level_filter.clone();
            Callback::from(move |_| level_filter.set(None))
        };
        html! {
            <div class="tag-filter-row">
                <button
                    class={classes!("tag-button", all_active.then(|| "active"))}
                    onclick={clear}
                >
                    {"All"}
                </button>
                { for Level::ALL.iter().map(|level| {
                    let level_filter = level_filter.clone();
                    let level = *level;
                    let active = *level_filter == Some(level);
                    let onclick = Callback::from(move |_| level_filter.set(Some(level)));
                    html! {
                        <button
                            class={classes!("tag-button", active.then(|| "active"))}
                            {onclick}
                        >
                            {level.label()}
                        </button>
                    }
                }) }
            </div>
        }
    };

    html! {
        <div class="learning-page">
            <section class="page-hero">
                <div class="page-main">
                    <div class="logo-circle logo-circle-large fade-in">{config::LOGO_TEXT}</div>
                    <h1 class="fade-in">{"Learning Hub"}</h1>
                    <p class="fade-in">
                        {"Master AI and Machine Learning through curated courses, hands-on tutorials, \
                          and collaborative learning experiences."}
                    </p>
                    <div class="hero-cta-group fade-in">
                        <a href="#courses" class="button-secondary">{"Browse Courses"}</a>
                        <a href="#tutorials" class="button-secondary">{"Start Tutorial"}</a>
                        <a href="#study-groups" class="button-secondary">{"Join Study Group"}</a>
                    </div>
                </div>
            </section>

            <main class="page-main">
                <section id="courses" class="content-section">
                    <HubSectionHeader
                        title="Online Courses"
                        subtitle="Structured learning paths from top universities and platforms."
                        actions={level_tags}
                    />
                    <div class="card-grid card-grid-3 fade-in">
                        { for filtered_courses.iter().map(|course| html! {
                            <div class="card hover-lift">
                                <div class="card-meta">
                                    <h4>{course.title}</h4>
                                    <span class="muted">{format!("{}★", course.rating)}</span>
                                </div>
                                <p class="muted">{format!("{} • {}", course.provider, course.duration)}</p>
                                <p>{format!("Level: {}", course.level.label())}</p>
                                <div class="tag-row">
                                    { for course.tags.iter().map(|tag| html! {
                                        <span class="tag tag-small">{*tag}</span>
                                    }) }
                                </div>
                                <a href="#" class="subtle-link">{"Enroll Now"}</a>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="tutorials" class="content-section">
                    <HubSectionHeader
                        title="Hands-On Tutorials"
                        subtitle="Step-by-step guides to build real AI projects."
                    />
                    <div class="card-grid card-grid-3">
                        { for TUTORIALS.iter().map(|tutorial| html! {
                            <div class="card hover-lift fade-in">
                                <h4>{tutorial.title}</h4>
                                <p class="muted">{format!("By {} • {}", tutorial.author, tutorial.duration)}</p>
                                <p>{format!("Difficulty: {}", tutorial.difficulty.label())}</p>
                                <div class="tag-row">
                                    { for tutorial.tags.iter().map(|tag| html! {
                                        <span class="tag tag-small">{*tag}</span>
                                    }) }
                                </div>
                                <a href="#" class="subtle-link">{"Start Tutorial"}</a>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="resources" class="content-section">
                    <HubSectionHeader
                        title="Learning Resources"
                        subtitle="Essential tools and references for your AI journey."
                    />
                    <div class="card-grid card-grid-3">
                        { for RESOURCES.iter().map(|resource| html! {
                            <div class="card hover-lift fade-in">
                                <div class="person-row">
                                    <Avatar name={resource.kind} size={40} />
                                    <div>
                                        <h4>{resource.title}</h4>
                                        <p class="muted">{resource.kind}</p>
                                    </div>
                                </div>
                                <p>{resource.description}</p>
                                <a href="#" class="subtle-link">{"Access Resource"}</a>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="workshops" class="content-section">
                    <HubSectionHeader
                        title="Upcoming Workshops"
                        subtitle="Interactive sessions with industry experts and researchers."
                    />
                    <div class="card-grid card-grid-2">
                        { for WORKSHOPS.iter().map(|workshop| html! {
                            <div class="card hover-lift fade-in">
                                <h4>{workshop.title}</h4>
                                <ul class="detail-list">
                                    <li>{workshop.date}</li>
                                    <li>{workshop.instructor}</li>
                                    <li>{workshop.duration}</li>
                                    <li>{format!("Level: {}", workshop.level.label())}</li>
                                    <li>{format!("{} spots available", workshop.spots)}</li>
                                </ul>
                                <a href="#" class="subtle-link">{"Register"}</a>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="study-groups" class="content-section">
                    <HubSectionHeader
                        title="Study Groups"
                        subtitle="Join collaborative learning communities."
                    />
                    <div class="card-grid card-grid-2">
                        { for STUDY_GROUPS.iter().map(|group| html! {
                            <div class="card hover-lift fade-in">
                                <h4>{group.name}</h4>
                                <ul class="detail-list">
                                    <li>{format!("{} members", group.members)}</li>
                                    <li>{format!("Focus: {}", group.focus)}</li>
                                    <li>{group.schedule}</li>
                                </ul>
                                <a href="#" class="subtle-link">{"Join Group"}</a>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="tools" class="content-section">
                    <HubSectionHeader
                        title="Tools & Frameworks"
                        subtitle="Essential software for AI development."
                    />
                    <div class="card-grid card-grid-3">
                        { for TOOLS.iter().map(|tool| html! {
                            <div class="card hover-lift fade-in">
                                <div class="person-row">
                                    <Avatar name={tool.name} size={48} />
                                    <div>
                                        <h4>{tool.name}</h4>
                                        <p class="muted">{tool.category}</p>
                                    </div>
                                </div>
                                <p>{tool.description}</p>
                                <a href="#" class="subtle-link">{"Learn More"}</a>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="books" class="content-section">
                    <HubSectionHeader
                        title="Recommended Books"
                        subtitle="Essential reading for deep understanding."
                    />
                    <div class="card-grid card-grid-3">
                        { for BOOKS.iter().map(|book| html! {
                            <div class="card hover-lift fade-in">
                                <h4>{book.title}</h4>
                                <p class="muted">{format!("by {}", book.author)}</p>
                                <div class="card-meta">
                                    <span class="muted">{format!("Level: {}", book.level.label())}</span>
                                    <span class="muted">{format!("{}★", book.rating)}</span>
                                </div>
                                <a href="#" class="subtle-link">{"View Book"}</a>
                            </div>
                        }) }
                    </div>
                </section>

                <section class="content-section">
                    <div class="card card-centered fade-in">
                        <h3 class="text-gradient">{"Start Your AI Learning Journey"}</h3>
                        <p>
                            {"Join thousands of learners mastering AI through our comprehensive resources \
                              and community support."}
                        </p>
                        <div class="hero-cta-group">
                            <a href="#courses" class="button-secondary">{"Browse Courses"}</a>
                            <a href="#study-groups" class="button-secondary">{"Join Community"}</a>
                            <a href="#workshops" class="button-secondary">{"Attend Workshop"}</a>
                        </div>
                    </div>
                </section>

                <div class="closing-quote">
                    <p class="text-gradient">{"\u{201c}Learning never exhausts the mind.\u{201d}"}</p>
                </div>
            </main>
        </div>
    }
}
