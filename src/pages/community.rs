use yew::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::scroll_reveal::use_scroll_reveal;
use crate::config;

struct NewsletterIssue {
    title: String,
    date: String,
    tags: [&'static str; 2],
}

// The archive is a regular monthly cadence, so the back issues are generated
// rather than written out one by one.
fn newsletter_issues() -> Vec<NewsletterIssue> {
    (0..8)
        .map(|i| {
            let volume = 8 - i;
            NewsletterIssue {
                title: format!("Vol. 0{} — Monthly Dispatch", volume),
                date: format!("2025-{:02}", volume),
                tags: [
                    if i % 2 == 1 { "Research" } else { "Events" },
                    if i % 3 != 0 { "Careers" } else { "Projects" },
                ],
            }
        })
        .collect()
}

const NEWSLETTER_TAGS: &[&str] = &["Research", "Events", "Careers", "Projects"];

struct NewsItem {
    title: &'static str,
    source: &'static str,
    date: &'static str,
    summary: &'static str,
    tags: &'static [&'static str],
}

const AI_NEWS: [NewsItem; 3] = [
    NewsItem {
        title: "New Efficient Vision Transformer Beats Baselines",
        source: "Open Research Blog",
        date: "2025-08-18",
        summary: "Parameter-efficient ViT variant with improved training stability and smaller compute budget.",
        tags: &["Research", "Vision"],
    },
    NewsItem {
        title: "Toolkit: Lightweight Serving for Edge LLMs",
        source: "Community",
        date: "2025-08-16",
        summary: "Open-source runtime enabling quantized LLM inference on consumer GPUs.",
        tags: &["Systems", "Open-Source"],
    },
    NewsItem {
        title: "Policy Note: Campus Guidelines for GenAI Use",
        source: "University",
        date: "2025-08-10",
        summary: "Draft ethics & policy recommendations for responsible AI practice in coursework.",
        tags: &["Policy", "Ethics"],
    },
];

const NEWS_TAGS: &[&str] = &["Research", "Vision", "Systems", "Open-Source", "Policy", "Ethics"];

struct Innovation {
    title: &'static str,
    contributor: &'static str,
    summary: &'static str,
    tags: &'static [&'static str],
}

const INNOVATIONS: [Innovation; 3] = [
    Innovation {
        title: "Diffusion-Guided Control for Robotics",
        contributor: "Robotics Lab",
        summary: "Combines diffusion priors with classical control for robust manipulation.",
        tags: &["Robotics", "Generative"],
    },
    Innovation {
        title: "AutoEval: Zero-Setup Eval Framework",
        contributor: "AI Society",
        summary: "Run standardized evals for NLP/Multimodal tasks with one YAML.",
        tags: &["Evaluation", "Toolkit"],
    },
    Innovation {
        title: "LoRA++: Structured Adapters for LLMs",
        contributor: "NLP Group",
        summary: "Improves adaptation while preserving instruction-following quality.",
        tags: &["NLP", "LLM"],
    },
];

const INNOVATION_TAGS: &[&str] = &[
    "Robotics",
    "Generative",
    "Evaluation",
    "Toolkit",
    "NLP",
    "LLM",
];

struct CommunityProject {
    title: &'static str,
    desc: &'static str,
    team: &'static [&'static str],
}

const PROJECTS: [CommunityProject; 3] = [
    CommunityProject {
        title: "CampusGPT",
        desc: "Q&A agent over university handbooks, schedules, and policies.",
        team: &["Akshat", "Rohit", "Jasmine"],
    },
    CommunityProject {
        title: "Vision-Board",
        desc: "Real-time CV dashboard for lab hardware and dataset status.",
        team: &["Neha", "Dev", "Rhea"],
    },
    CommunityProject {
        title: "JudgeAI",
        desc: "Competition problem grader with sandboxed execution and analytics.",
        team: &["Ayush", "Meera"],
    },
];

struct BlogPost {
    title: &'static str,
    author: &'static str,
    date: &'static str,
    tags: &'static [&'static str],
}

const BLOGS: [BlogPost; 3] = [
    BlogPost {
        title: "A Friendly Intro to RLHF for Students",
        author: "Ananya Gupta",
        date: "2025-08-12",
        tags: &["Tutorial", "NLP"],
    },
    BlogPost {
        title: "From Kaggle to ICPC: My CP Journey",
        author: "Ayush Srivastava",
        date: "2025-08-05",
        tags: &["Career", "CP"],
    },
    BlogPost {
        title: "Figma to Code: Design Systems for Devs",
        author: "Kriti Sharma",
        date: "2025-07-30",
        tags: &["Design", "Web"],
    },
];

const BLOG_TAGS: &[&str] = &["Tutorial", "NLP", "Career", "CP", "Design", "Web"];

struct Spotlight {
    name: &'static str,
    role: &'static str,
    blurb: &'static str,
}

const MEMBER_SPOTLIGHTS: [Spotlight; 2] = [
    Spotlight {
        name: "Sara Iqbal",
        role: "AI/ML Co-Lead",
        blurb: "Paper accepted at ACL Student Research Workshop on evaluation reliability.",
    },
    Spotlight {
        name: "Dev Patel",
        role: "Web Dev Lead",
        blurb: "Shipped a campus-wide attendance dashboard used by 1k+ students.",
    },
];

const ALUMNI_SPOTLIGHTS: [Spotlight; 2] = [
    Spotlight {
        name: "Siddharth Jain",
        role: "Ex Web Dev Lead ('23)",
        blurb: "Now SDE at a top cloud company; maintains OSS libraries.",
    },
    Spotlight {
        name: "Aishwarya Rao",
        role: "Ex AI/ML Lead ('24)",
        blurb: "Published at NeurIPS Datasets & Benchmarks; PhD incoming.",
    },
];

const FORUM_ROOMS: [&str; 4] = [
    "Coding Help (AI/ML)",
    "Paper Discussions",
    "Competitions & Hackathons",
    "Career Advice",
];

struct LearningLink {
    title: &'static str,
    detail: &'static str,
}

const HUB_COURSES: [LearningLink; 3] = [
    LearningLink { title: "Intro to ML", detail: "fast.ai • Beginner" },
    LearningLink { title: "Deep Learning Specialization", detail: "Coursera • Intermediate" },
    LearningLink { title: "Probabilistic ML", detail: "MIT OCW • Advanced" },
];

const HUB_PAPERS: [LearningLink; 3] = [
    LearningLink { title: "Attention Is All You Need", detail: "NLP" },
    LearningLink { title: "Masked Autoencoders", detail: "Vision" },
    LearningLink { title: "LoRA", detail: "Adapters" },
];

const HUB_CHEATSHEETS: [LearningLink; 2] = [
    LearningLink { title: "PyTorch Quick Ref", detail: "DL" },
    LearningLink { title: "NLP Preprocessing", detail: "NLP" },
];

const UPCOMING_MEETUPS: [LearningLink; 2] = [
    LearningLink { title: "AI Ethics Roundtable", detail: "2025-09-05 • Auditorium A" },
    LearningLink { title: "HackAI 2025", detail: "2025-10-12 • Innovation Lab" },
];

const PAST_MEETUPS: [LearningLink; 2] = [
    LearningLink { title: "Summer Workshop: Diffusion", detail: "2025-07-10" },
    LearningLink { title: "CP Sprint #4", detail: "2025-06-02" },
];

const PHOTOS: [&str; 3] = ["Hackathon Night", "Guest Lecture", "Workshop"];
const VIDEOS: [&str; 2] = ["AI Summit Recap", "Interview: Faculty Mentor"];

const PODCAST: [LearningLink; 2] = [
    LearningLink { title: "Episode 01 — Scaling LLMs on Campus", detail: "Guest: Research Lead" },
    LearningLink { title: "Episode 02 — Ethics x AI", detail: "Guest: Philosophy Dept." },
];

const PARTNERS: [&str; 3] = ["NVIDIA University", "Hugging Face", "Open Source Lab"];

#[derive(Properties, PartialEq)]
struct TagFilterProps {
    options: &'static [&'static str],
    active: Option<&'static str>,
    on_select: Callback<Option<&'static str>>,
}

#[function_component(TagFilter)]
fn tag_filter(props: &TagFilterProps) -> Html {
    let clear = {
        let on_select = props.on_select.clone();
        Callback::from(move |_| on_select.emit(None))
    };

    html! {
        <div class="tag-filter-row">
            <button
                class={classes!("tag-button", props.active.is_none().then(|| "active"))}
                onclick={clear}
            >
                {"All"}
            </button>
            { for props.options.iter().map(|option| {
                let on_select = props.on_select.clone();
                let option = *option;
                let active = props.active == Some(option);
                let onclick = Callback::from(move |_| on_select.emit(Some(option)));
                html! {
                    <button
                        class={classes!("tag-button", active.then(|| "active"))}
                        {onclick}
                    >
                        {option}
                    </button>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CommunityHeaderProps {
    title: String,
    subtitle: String,
    #[prop_or_default]
    actions: Html,
}

#[function_component(CommunityHeader)]
fn community_header(props: &CommunityHeaderProps) -> Html {
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

#[function_component(Community)]
pub fn community() -> Html {
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

    let issue_filter = use_state(|| None::<&'static str>);
    let news_filter = use_state(|| None::<&'static str>);
    let innovation_filter = use_state(|| None::<&'static str>);
    let blog_filter = use_state(|| None::<&'static str>);

    let issues = newsletter_issues();
    let filtered_issues: Vec<&NewsletterIssue> = issues
        .iter()
        .filter(|issue| issue_filter.map_or(true, |tag| issue.tags.contains(&tag)))
        .collect();
    let filtered_news: Vec<&NewsItem> = AI_NEWS
        .iter()
        .filter(|item| news_filter.map_or(true, |tag| item.tags.contains(&tag)))
        .collect();
    let filtered_innovations: Vec<&Innovation> = INNOVATIONS
        .iter()
        .filter(|item| innovation_filter.map_or(true, |tag| item.tags.contains(&tag)))
        .collect();
    let filtered_blogs: Vec<&BlogPost> = BLOGS
        .iter()
        .filter(|post| blog_filter.map_or(true, |tag| post.tags.contains(&tag)))
        .collect();

    let on_issue_select = {
        let issue_filter = issue_filter.clone();
        Callback::from(move |tag| issue_filter.set(tag))
    };
    let on_news_select = {
        let news_filter = news_filter.clone();
        Callback::from(move |tag| news_filter.set(tag))
    };
    let on_innovation_select = {
        let innovation_filter = innovation_filter.clone();
        Callback::from(move |tag| innovation_filter.set(tag))
    };
    let on_blog_select = {
        let blog_filter = blog_filter.clone();
        Callback::from(move |tag| blog_filter.set(tag))
    };

    html! {
        <div class="community-page">
            <section class="page-hero">
                <div class="page-main">
                    <div class="logo-circle logo-circle-large fade-in">{config::LOGO_TEXT}</div>
                    <h1 class="fade-in">{"Community Hub"}</h1>
                    <p class="fade-in">
                        {"Where minds meet and ideas grow — newsletters, AI news, innovations, student \
                          projects, learning, and more."}
                    </p>
                    <div class="hero-cta-group fade-in">
                        <a href="#newsletter" class="button-secondary">{"Subscribe"}</a>
                        <a href="#submit" class="button-secondary">{"Submit Work"}</a>
                        <a href="#forums" class="button-secondary">{"Join Discussion"}</a>
                    </div>
                </div>
            </section>

            <main class="page-main">
                <section id="newsletter" class="content-section">
                    <CommunityHeader
                        title="Newsletter Archive"
                        subtitle="Monthly dispatches featuring campus research, events, and opportunities."
                        actions={html! {
                            <TagFilter
                                options={NEWSLETTER_TAGS}
                                active={*issue_filter}
                                on_select={on_issue_select}
                            />
                        }}
                    />

                    <div class="card card-emphasized fade-in">
                        <div class="person-row">
                            <Avatar name="Frontier Models" size={72} />
                            <div>
                                <h3>{"Vol. 07 — Frontier Models & Campus Research Roundup"}</h3>
                                <p class="muted">{"Aug 2025"}</p>
                                <p>
                                    {"Coverage of foundation models, campus paper highlights, upcoming \
                                      hackathon, and a deep-dive on reproducibility."}
                                </p>
                                <a href="#" class="subtle-link">{"Download PDF"}</a>
                            </div>
                        </div>
                    </div>

                    <div class="card-grid card-grid-4 fade-in">
                        { for filtered_issues.iter().map(|issue| html! {
                            <div class="card hover-lift">
                                <div class="person-row">
                                    <Avatar name={issue.title.clone()} size={56} />
                                    <div>
                                        <h4>{&issue.title}</h4>
                                        <p class="muted">{&issue.date}</p>
                                        <div class="tag-row">
                                            { for issue.tags.iter().map(|tag| html! {
                                                <span class="tag tag-small">{*tag}</span>
                                            }) }
                                        </div>
                                        <a href="#" class="subtle-link">{"Open"}</a>
                                    </div>
                                </div>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="ainews" class="content-section">
                    <CommunityHeader
                        title="AI News & Global Updates"
                        subtitle="Curated breakthroughs, industry updates, and policy notes."
                        actions={html! {
                            <TagFilter
                                options={NEWS_TAGS}
                                active={*news_filter}
                                on_select={on_news_select}
                            />
                        }}
                    />
                    <div class="card-grid card-grid-3 fade-in">
                        { for filtered_news.iter().map(|item| html! {
                            <div class="card hover-lift">
                                <h4>{item.title}</h4>
                                <p class="muted">{format!("{} • {}", item.source, item.date)}</p>
                                <p>{item.summary}</p>
                                <div class="tag-row">
                                    { for item.tags.iter().map(|tag| html! {
                                        <span class="tag tag-small">{*tag}</span>
                                    }) }
                                </div>
                                <a href="#" class="subtle-link">{"Read more"}</a>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="innovations" class="content-section">
                    <CommunityHeader
                        title="Innovations & Discoveries"
                        subtitle="New tools, frameworks, and campus-led breakthroughs."
                        actions={html! {
                            <TagFilter
                                options={INNOVATION_TAGS}
                                active={*innovation_filter}
                                on_select={on_innovation_select}
                            />
                        }}
                    />
                    <div class="card-grid card-grid-3 fade-in">
                        { for filtered_innovations.iter().map(|item| html! {
                            <div class="card hover-lift">
                                <h4>{item.title}</h4>
                                <p class="muted">{item.contributor}</p>
                                <p>{item.summary}</p>
                                <div class="tag-row">
                                    { for item.tags.iter().map(|tag| html! {
                                        <span class="tag tag-small">{*tag}</span>
                                    }) }
                                </div>
                                <a href="#" class="subtle-link">{"Explore"}</a>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="projects" class="content-section">
                    <CommunityHeader
                        title="Community Projects"
                        subtitle="Student-led initiatives, hackathon builds, and research tools."
                    />
                    <div class="card-grid card-grid-3">
                        { for PROJECTS.iter().map(|project| html! {
                            <div class="card hover-lift fade-in">
                                <h4>{project.title}</h4>
                                <p>{project.desc}</p>
                                <p class="muted">{format!("Team: {}", project.team.join(", "))}</p>
                                <a href="#" class="subtle-link">{"GitHub"}</a>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="blogs" class="content-section">
                    <CommunityHeader
                        title="Student Blogs & Thought Pieces"
                        subtitle="Editorially reviewed articles from the community."
                        actions={html! {
                            <TagFilter
                                options={BLOG_TAGS}
                                active={*blog_filter}
                                on_select={on_blog_select}
                            />
                        }}
                    />
                    <div class="card-grid card-grid-3 fade-in">
                        { for filtered_blogs.iter().map(|post| html! {
                            <div class="card hover-lift">
                                <h4>{post.title}</h4>
                                <p class="muted">{format!("By {} • {}", post.author, post.date)}</p>
                                <div class="tag-row">
                                    { for post.tags.iter().map(|tag| html! {
                                        <span class="tag tag-small">{*tag}</span>
                                    }) }
                                </div>
                                <a href="#" class="subtle-link">{"Read"}</a>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="spotlights" class="content-section">
                    <CommunityHeader
                        title="Community Spotlights"
                        subtitle="Celebrating standout members and alumni."
                    />
                    <div class="card-grid card-grid-2">
                        <div class="card card-emphasized fade-in">
                            <h3 class="text-gradient">{"Members"}</h3>
                            { for MEMBER_SPOTLIGHTS.iter().map(|spotlight| html! {
                                <div class="person-row">
                                    <Avatar name={spotlight.name} size={56} />
                                    <div>
                                        <h4>{spotlight.name}</h4>
                                        <p class="muted">{spotlight.role}</p>
                                        <p>{spotlight.blurb}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                        <div class="card card-emphasized fade-in">
                            <h3 class="text-gradient">{"Alumni"}</h3>
                            { for ALUMNI_SPOTLIGHTS.iter().map(|spotlight| html! {
                                <div class="person-row">
                                    <Avatar name={spotlight.name} size={56} />
                                    <div>
                                        <h4>{spotlight.name}</h4>
                                        <p class="muted">{spotlight.role}</p>
                                        <p>{spotlight.blurb}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="forums" class="content-section">
                    <CommunityHeader
                        title="Discussion & Forums"
                        subtitle="Ask questions, discuss papers, and collaborate."
                    />
                    <div class="card fade-in">
                        <ul class="forum-grid">
                            { for FORUM_ROOMS.iter().map(|room| html! {
                                <li>{*room}</li>
                            }) }
                        </ul>
                    </div>
                </section>

                <section id="learning" class="content-section">
                    <CommunityHeader
                        title="Learning Hub"
                        subtitle="Curated courses, must-read papers, and handy cheat sheets."
                    />
                    <div class="card-grid card-grid-3">
                        <div class="card card-emphasized fade-in">
                            <h3>{"Courses"}</h3>
                            <ul class="link-list">
                                { for HUB_COURSES.iter().map(|entry| html! {
                                    <li>
                                        <p>{entry.title}</p>
                                        <p class="muted">{entry.detail}</p>
                                    </li>
                                }) }
                            </ul>
                        </div>
                        <div class="card card-emphasized fade-in">
                            <h3>{"Key Papers"}</h3>
                            <ul class="link-list">
                                { for HUB_PAPERS.iter().map(|entry| html! {
                                    <li>
                                        <p>{entry.title}</p>
                                        <p class="muted">{entry.detail}</p>
                                    </li>
                                }) }
                            </ul>
                        </div>
                        <div class="card card-emphasized fade-in">
                            <h3>{"Cheat Sheets"}</h3>
                            <ul class="link-list">
                                { for HUB_CHEATSHEETS.iter().map(|entry| html! {
                                    <li>
                                        <p>{entry.title}</p>
                                        <p class="muted">{entry.detail}</p>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    </div>
                </section>

                <section id="events" class="content-section">
                    <CommunityHeader
                        title="Events & Meetups"
                        subtitle="What's next on campus, and what you may have missed."
                    />
                    <div class="card-grid card-grid-2">
                        <div class="card card-emphasized fade-in">
                            <h3>{"Upcoming"}</h3>
                            <ul class="link-list">
                                { for UPCOMING_MEETUPS.iter().map(|entry| html! {
                                    <li>
                                        <p>{entry.title}</p>
                                        <p class="muted">{entry.detail}</p>
                                        <a href="#" class="subtle-link">{"Register"}</a>
                                    </li>
                                }) }
                            </ul>
                        </div>
                        <div class="card card-emphasized fade-in">
                            <h3>{"Past Events"}</h3>
                            <ul class="link-list">
                                { for PAST_MEETUPS.iter().map(|entry| html! {
                                    <li>
                                        <p>{entry.title}</p>
                                        <p class="muted">{entry.detail}</p>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    </div>
                </section>

                <section id="media" class="content-section">
                    <CommunityHeader
                        title="Media Gallery"
                        subtitle="Highlights from workshops, hackathons, and talks."
                    />
                    <div class="card-grid card-grid-2">
                        <div class="card card-emphasized fade-in">
                            <h3>{"Photos"}</h3>
                            <div class="gallery-grid">
                                { for PHOTOS.iter().map(|title| html! {
                                    <a href="#" class="gallery-tile">{*title}</a>
                                }) }
                            </div>
                        </div>
                        <div class="card card-emphasized fade-in">
                            <h3>{"Videos"}</h3>
                            <div class="gallery-grid gallery-grid-single">
                                { for VIDEOS.iter().map(|title| html! {
                                    <a href="#" class="gallery-tile">{*title}</a>
                                }) }
                            </div>
                        </div>
                    </div>
                </section>

                <section id="podcast" class="content-section">
                    <CommunityHeader
                        title="Podcast / Video Series"
                        subtitle="Interviews, roundtables, and research explainers."
                    />
                    <div class="card-grid card-grid-3">
                        { for PODCAST.iter().map(|episode| html! {
                            <div class="card hover-lift fade-in">
                                <h4>{episode.title}</h4>
                                <p class="muted">{episode.detail}</p>
                                <a href="#" class="subtle-link">{"Play"}</a>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="submit" class="content-section">
                    <CommunityHeader
                        title="Community Contributions"
                        subtitle="Got a project, article, or news to share? Submit below."
                    />
                    <div class="card fade-in">
                        <form class="submit-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                            <input type="text" placeholder="Your Name" />
                            <input type="email" placeholder="Email" />
                            <input class="span-2" type="text" placeholder="Title" />
                            <select>
                                <option>{"Project"}</option>
                                <option>{"Blog"}</option>
                                <option>{"News"}</option>
                                <option>{"Event"}</option>
                            </select>
                            <input type="text" placeholder="Link (GitHub/Doc)" />
                            <textarea class="span-2" placeholder="Short Description" rows="4"></textarea>
                            <div class="span-2 submit-row">
                                <p class="muted">{"By submitting, you agree to our editorial guidelines."}</p>
                                <button class="button-secondary" type="submit">{"Submit"}</button>
                            </div>
                        </form>
                    </div>
                </section>

                <section id="partners" class="content-section">
                    <CommunityHeader
                        title="Partners & Collaborations"
                        subtitle="Organizations that support our mission."
                    />
                    <div class="card-grid card-grid-4">
                        { for PARTNERS.iter().map(|partner| html! {
                            <div class="card fade-in">
                                <div class="person-row">
                                    <Avatar name={*partner} size={40} />
                                    <div>
                                        <p class="partner-name">{*partner}</p>
                                        <a href="#" class="subtle-link">{"Visit"}</a>
                                    </div>
                                </div>
                            </div>
                        }) }
                    </div>
                </section>

                <section class="content-section">
                    <div class="card card-centered fade-in">
                        <h3 class="text-gradient">{"Join our community of innovators today"}</h3>
                        <p>
                            {"Be part of the newsletter, participate in events, publish your work, and \
                              shape the future of AI on campus."}
                        </p>
                        <div class="hero-cta-group">
                            <a href="#newsletter" class="button-secondary">{"Subscribe"}</a>
                            <a href="#submit" class="button-secondary">{"Submit Work"}</a>
                            <a href="#forums" class="button-secondary">{"Join Discussion"}</a>
                        </div>
                    </div>
                </section>

                <div class="closing-quote">
                    <p class="text-gradient">{"\u{201c}Knowledge grows when it's shared.\u{201d}"}</p>
                </div>
            </main>
        </div>
    }
}
