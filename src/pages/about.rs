use chrono::{Datelike, Local};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::counter::Counter;
use crate::components::scroll_reveal::use_scroll_reveal;
use crate::config;

struct IntroCard {
    heading: &'static str,
    body: &'static str,
}

const INTRO_CARDS: [IntroCard; 3] = [
    IntroCard {
        heading: "Who We Are",
        body: "We are a student-driven organization uniting researchers, builders, and enthusiasts to explore and advance Artificial Intelligence across disciplines.",
    },
    IntroCard {
        heading: "Why We Exist",
        body: "We exist to bridge classrooms, labs, and industry, giving students access to hands-on learning, mentorship, and real-world impact.",
    },
    IntroCard {
        heading: "What Makes Us Unique",
        body: "From faculty-collab research sprints to industry-led workshops, we run programs that turn curiosity into contributions.",
    },
];

struct Value {
    name: &'static str,
    desc: &'static str,
}

const VALUES: [Value; 5] = [
    Value { name: "Innovation", desc: "We encourage bold ideas and rapid prototyping." },
    Value { name: "Collaboration", desc: "We work across disciplines, backgrounds, and teams." },
    Value { name: "Ethics", desc: "We champion safety, fairness, and responsible use." },
    Value { name: "Sharing", desc: "We publish, teach, and open-source our work." },
    Value { name: "Inclusion", desc: "We welcome newcomers and diverse perspectives." },
];

struct Leader {
    name: &'static str,
    title: &'static str,
    bio: Option<&'static str>,
}

const FACULTY: [Leader; 1] = [Leader {
    name: "Prof. Meera Kulkarni",
    title: "Faculty-in-Charge",
    bio: Some("Robotics & Learning; leads Human-In-The-Loop Lab."),
}];

const EXECUTIVES: [Leader; 4] = [
    Leader { name: "Arjun Verma", title: "President", bio: None },
    Leader { name: "Ananya Gupta", title: "Vice President (Research)", bio: None },
    Leader { name: "Dev Patel", title: "Secretary", bio: None },
    Leader { name: "Sara Iqbal", title: "Treasurer", bio: None },
];

struct Milestone {
    year: &'static str,
    title: &'static str,
    desc: &'static str,
}

const TIMELINE: [Milestone; 4] = [
    Milestone {
        year: "2022",
        title: "Society Founded",
        desc: "Kickstarted with 25 members and a weekend ML bootcamp.",
    },
    Milestone {
        year: "2023",
        title: "First Hackathon",
        desc: "200+ participants; 18 open-source toolkits released.",
    },
    Milestone {
        year: "2024",
        title: "Industry Partnerships",
        desc: "Collaborations with 5 companies and 2 labs; campus AI summit.",
    },
    Milestone {
        year: "2025",
        title: "Research Track",
        desc: "Student papers in workshops; evaluation toolkit v2 launched.",
    },
];

const ACTIVITIES: [Value; 5] = [
    Value {
        name: "Workshops & Seminars",
        desc: "Deep dives on ML, DL, NLP, CV, GenAI with hands-on labs.",
    },
    Value {
        name: "Research Collaborations",
        desc: "Faculty-guided projects, reading groups, and paper sprints.",
    },
    Value {
        name: "Hackathons & Competitions",
        desc: "Internal build sprints and external contest participation.",
    },
    Value {
        name: "Industry Networking",
        desc: "Guest talks, mentorship, and career pathways.",
    },
    Value {
        name: "Community Projects",
        desc: "Open-source tools and AI-for-good initiatives.",
    },
];

const PARTNERS: [&str; 3] = ["NVIDIA University", "Hugging Face", "Open Source Lab"];

struct Achievement {
    label: &'static str,
    value: u32,
}

const ACHIEVEMENTS: [Achievement; 4] = [
    Achievement { label: "Active Members", value: 320 },
    Achievement { label: "Workshops Conducted", value: 54 },
    Achievement { label: "Papers & Posters", value: 12 },
    Achievement { label: "Partners & Labs", value: 7 },
];

struct Testimonial {
    name: &'static str,
    role: &'static str,
    quote: &'static str,
}

const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        name: "Kriti Sharma",
        role: "NLP Track Lead",
        quote: "I found mentors, co-authors, and friends. The Society made research approachable and fun.",
    },
    Testimonial {
        name: "Ayush Srivastava",
        role: "Competitive Programming Lead",
        quote: "Weekly code clinics helped me ship my first production model and win a hackathon.",
    },
];

const ETHICS_TEXT: &str = "We commit to responsible AI. Our events include fairness, interpretability, and safety sessions, and our projects follow an ethics checklist.";

const ETHICS_BULLETS: [&str; 4] = [
    "Model Cards & Datasheets with every release",
    "Bias audits in tutorials & projects",
    "Privacy-first data handling",
    "Accessibility & inclusion principles",
];

const GALLERY: [&str; 4] = ["Hackathon Night", "Guest Lecture", "Workshop", "Reading Group"];

struct Faq {
    question: &'static str,
    answer: &'static str,
}

const FAQS: [Faq; 4] = [
    Faq {
        question: "Do I need prior experience?",
        answer: "No. We have on-ramps for beginners and peer mentors to help you start.",
    },
    Faq {
        question: "How often are events hosted?",
        answer: "We run weekly sessions during term and monthly hackathons.",
    },
    Faq {
        question: "Can non-CS students join?",
        answer: "Absolutely. Interdisciplinary perspectives are a strength.",
    },
    Faq {
        question: "How do I join a research project?",
        answer: "Apply to a track (NLP, CV, Systems) and attend a reading sprint to meet teams.",
    },
];

const SOCIALS: [&str; 4] = ["LinkedIn", "X/Twitter", "Instagram", "YouTube"];

#[derive(Properties, PartialEq)]
struct AccordionItemProps {
    question: String,
    answer: String,
    #[prop_or(false)]
    default_open: bool,
}

#[function_component(AccordionItem)]
fn accordion_item(props: &AccordionItemProps) -> Html {
    let is_open = use_state(|| props.default_open);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("accordion-item", is_open.then(|| "open"))}>
            <button class="accordion-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                <span>{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            {
                if *is_open {
                    html! { <div class="accordion-answer"><p>{&props.answer}</p></div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SectionHeaderProps {
    eyebrow: String,
    title: String,
    subtitle: String,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <header class="section-header fade-in">
            <p class="eyebrow">{&props.eyebrow}</p>
            <h2 class="text-gradient">{&props.title}</h2>
            <p class="section-subtitle">{&props.subtitle}</p>
            <div class="gradient-rule"></div>
        </header>
    }
}

#[function_component(About)]
pub fn about() -> Html {
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

    let year = Local::now().year();

    html! {
        <div class="about-page">
            <section class="page-hero">
                <div class="page-main">
                    <div class="logo-circle logo-circle-large fade-in">{config::LOGO_TEXT}</div>
                    <h1 class="fade-in">{"Empowering the Future of AI, Together."}</h1>
                    <p class="fade-in">
                        {"The University AI Society is a hub for innovation, research, and collaboration \
                          in Artificial Intelligence."}
                    </p>
                    <div class="hero-cta-group fade-in">
                        <a href="#activities" class="button-secondary">{"Explore Our Work"}</a>
                        <a href="#contact" class="button-secondary">{"Get in Touch"}</a>
                    </div>
                </div>
            </section>

            <main class="page-main">
                <section id="intro" class="content-section">
                    <SectionHeader
                        eyebrow="Who We Are"
                        title="About the Society"
                        subtitle="A community of students, researchers, and builders advancing Artificial Intelligence."
                    />
                    <div class="card-grid card-grid-3">
                        { for INTRO_CARDS.iter().map(|card| html! {
                            <div class="card fade-in">
                                <h3>{card.heading}</h3>
                                <p>{card.body}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="mission" class="content-section">
                    <SectionHeader
                        eyebrow="Mission, Vision & Values"
                        title="Our Guiding Principles"
                        subtitle="Clear goals with values that shape how we learn, build, and share."
                    />
                    <div class="card-grid card-grid-3">
                        <div class="card fade-in">
                            <h3 class="text-gradient">{"Mission"}</h3>
                            <p>{"To foster innovation and knowledge in AI by bridging academia, research, and industry."}</p>
                        </div>
                        <div class="card fade-in">
                            <h3 class="text-gradient">{"Vision"}</h3>
                            <p>{"To become a leading student-led AI community that shapes ethical, cutting-edge innovation."}</p>
                        </div>
                        <div class="card fade-in">
                            <h3 class="text-gradient">{"Values"}</h3>
                            <ul class="value-list">
                                { for VALUES.iter().map(|value| html! {
                                    <li><strong>{value.name}{": "}</strong>{value.desc}</li>
                                }) }
                            </ul>
                        </div>
                    </div>
                </section>

                <section id="leadership" class="content-section">
                    <SectionHeader
                        eyebrow="Leadership"
                        title="Faculty & Executive Team"
                        subtitle="Guided by experienced mentors and a driven student leadership."
                    />
                    <div class="card-grid card-grid-2">
                        <div class="card fade-in">
                            <h3 class="text-gradient">{"Faculty Advisors"}</h3>
                            { for FACULTY.iter().map(|leader| html! {
                                <div class="person-row">
                                    <Avatar name={leader.name} size={56} />
                                    <div>
                                        <h4>{leader.name}</h4>
                                        <p class="muted">{leader.title}</p>
                                        {
                                            match leader.bio {
                                                Some(bio) => html! { <p>{bio}</p> },
                                                None => html! {},
                                            }
                                        }
                                    </div>
                                </div>
                            }) }
                        </div>
                        <div class="card fade-in">
                            <h3 class="text-gradient">{"Executive Committee"}</h3>
                            <div class="person-grid">
                                { for EXECUTIVES.iter().map(|leader| html! {
                                    <div class="person-row">
                                        <Avatar name={leader.name} size={56} />
                                        <div>
                                            <h4>{leader.name}</h4>
                                            <p class="muted">{leader.title}</p>
                                        </div>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </div>
                </section>

                <section id="timeline" class="content-section">
                    <SectionHeader
                        eyebrow="History & Milestones"
                        title="Our Journey"
                        subtitle="Key moments that shaped the Society."
                    />
                    <div class="timeline">
                        { for TIMELINE.iter().map(|milestone| html! {
                            <div class="timeline-entry fade-in">
                                <div class="timeline-dot"></div>
                                <div class="card">
                                    <div class="timeline-heading">
                                        <span class="muted">{milestone.year}</span>
                                        <h4>{milestone.title}</h4>
                                    </div>
                                    <p>{milestone.desc}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="activities" class="content-section">
                    <SectionHeader
                        eyebrow="What We Do"
                        title="Programs & Activities"
                        subtitle="Hands-on learning, research, competitions, and networking."
                    />
                    <div class="card-grid card-grid-3">
                        { for ACTIVITIES.iter().map(|activity| html! {
                            <div class="card fade-in">
                                <h4>{activity.name}</h4>
                                <p>{activity.desc}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="partners" class="content-section">
                    <SectionHeader
                        eyebrow="Collaborations"
                        title="Partners & Labs"
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

                <section id="achievements" class="content-section">
                    <SectionHeader
                        eyebrow="Impact"
                        title="Achievements & Recognition"
                        subtitle="Highlights that reflect our community's growth and outcomes."
                    />
                    <div class="card-grid card-grid-4">
                        { for ACHIEVEMENTS.iter().map(|achievement| html! {
                            <div class="card stat-card fade-in">
                                <Counter target={achievement.value} />
                                <p class="stat-label">{achievement.label}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="testimonials" class="content-section">
                    <SectionHeader
                        eyebrow="Community Voices"
                        title="What Members Say"
                        subtitle="Stories from students who shaped and were shaped by the Society."
                    />
                    <div class="card-grid card-grid-2">
                        { for TESTIMONIALS.iter().map(|testimonial| html! {
                            <div class="card fade-in">
                                <p class="quote">{format!("\u{201c}{}\u{201d}", testimonial.quote)}</p>
                                <div class="person-row">
                                    <Avatar name={testimonial.name} size={48} />
                                    <div>
                                        <p>{testimonial.name}</p>
                                        <p class="muted">{testimonial.role}</p>
                                    </div>
                                </div>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="ethics" class="content-section">
                    <SectionHeader
                        eyebrow="Responsible AI"
                        title="Ethics & Social Responsibility"
                        subtitle="How we design, build, and teach with care."
                    />
                    <div class="ethics-grid">
                        <div class="card ethics-main fade-in">
                            <p>{ETHICS_TEXT}</p>
                            <ul class="ethics-bullets">
                                { for ETHICS_BULLETS.iter().map(|bullet| html! {
                                    <li>{*bullet}</li>
                                }) }
                            </ul>
                        </div>
                        <div class="card fade-in">
                            <h4>{"Resources"}</h4>
                            <ul class="resource-links">
                                <li><a href="#">{"Ethics Checklist Template"}</a></li>
                                <li><a href="#">{"Model Card Example"}</a></li>
                                <li><a href="#">{"Fairness Workshop Slides"}</a></li>
                            </ul>
                        </div>
                    </div>
                </section>

                <section id="gallery" class="content-section">
                    <SectionHeader
                        eyebrow="Moments"
                        title="Gallery"
                        subtitle="Snapshots from workshops, hackathons, and talks."
                    />
                    <div class="card-grid card-grid-4">
                        { for GALLERY.iter().map(|title| html! {
                            <a href="#" class="gallery-tile fade-in">{*title}</a>
                        }) }
                    </div>
                </section>

                <section id="faqs" class="content-section">
                    <SectionHeader
                        eyebrow="FAQs"
                        title="Frequently Asked Questions"
                        subtitle="Everything you might want to know before joining."
                    />
                    <div class="card-grid card-grid-2">
                        { for FAQS.iter().enumerate().map(|(index, faq)| html! {
                            <AccordionItem
                                question={faq.question}
                                answer={faq.answer}
                                default_open={index == 0}
                            />
                        }) }
                    </div>
                </section>

                <section id="contact" class="content-section">
                    <SectionHeader
                        eyebrow="Contact"
                        title="Get in Touch"
                        subtitle="We'd love to collaborate, mentor, or speak at your event."
                    />
                    <div class="card-grid card-grid-3">
                        <div class="card fade-in">
                            <h4>{"Email"}</h4>
                            <p>{config::CONTACT_EMAIL}</p>
                        </div>
                        <div class="card fade-in">
                            <h4>{"Office"}</h4>
                            <p>{config::OFFICE_LOCATION}</p>
                        </div>
                        <div class="card fade-in">
                            <h4>{"Socials"}</h4>
                            <div class="tag-row">
                                { for SOCIALS.iter().map(|social| html! {
                                    <a href="#" class="tag">{*social}</a>
                                }) }
                            </div>
                        </div>
                    </div>
                </section>

                <section class="content-section">
                    <div class="card card-centered fade-in">
                        <h3 class="text-gradient">{"Become a Member"}</h3>
                        <p>{"Join the Society to learn, build, and lead. Access mentorship, projects, and events."}</p>
                        <div class="hero-cta-group">
                            <a href="#contact" class="button-secondary">{"Apply Now"}</a>
                            <a href="#activities" class="button-secondary">{"Explore Activities"}</a>
                        </div>
                    </div>
                </section>

                <div class="closing-quote">
                    <p class="text-gradient">{"\u{201c}Knowledge grows when it's shared.\u{201d}"}</p>
                </div>
            </main>

            <footer class="about-footer">
                <div class="page-main footer-row">
                    <div class="person-row">
                        <div class="logo-circle">{config::LOGO_TEXT}</div>
                        <div>
                            <p>{"AI Society"}</p>
                            <p class="muted">{"Empowering the Future of AI, Together."}</p>
                        </div>
                    </div>
                    <p class="muted">{format!("© {} AI Society. All rights reserved.", year)}</p>
                </div>
            </footer>
        </div>
    }
}
