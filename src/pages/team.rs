use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::loading::TeamLoading;
use crate::components::scroll_reveal::ScrollReveal;
use crate::config;

#[derive(Clone, Copy, PartialEq)]
struct Person {
    name: &'static str,
    role: &'static str,
    intro: Option<&'static str>,
    bio: Option<&'static str>,
    image: Option<&'static str>,
    instagram: Option<&'static str>,
    linkedin: Option<&'static str>,
    github: Option<&'static str>,
}

impl Person {
    const fn new(name: &'static str, role: &'static str) -> Self {
        Person {
            name,
            role,
            intro: None,
            bio: None,
            image: None,
            instagram: None,
            linkedin: None,
            github: None,
        }
    }

    const fn intro(mut self, intro: &'static str) -> Self {
        self.intro = Some(intro);
        self
    }

    const fn bio(mut self, bio: &'static str) -> Self {
        self.bio = Some(bio);
        self
    }

    const fn image(mut self, image: &'static str) -> Self {
        self.image = Some(image);
        self
    }

    const fn instagram(mut self, url: &'static str) -> Self {
        self.instagram = Some(url);
        self
    }

    const fn linkedin(mut self, url: &'static str) -> Self {
        self.linkedin = Some(url);
        self
    }

    const fn github(mut self, url: &'static str) -> Self {
        self.github = Some(url);
        self
    }
}

struct Domain {
    name: &'static str,
    lead: Person,
    co_lead: Person,
    members: &'static [Person],
}

const FACULTY_IN_CHARGE: Person = Person::new(
    "Dr. Murari Mandal",
    "Faculty-in-Charge, Department of Computer Science",
)
.bio("Guiding the AI Society with research expertise in machine learning and responsible AI.");

const PRESIDENT: Person = Person::new("Nafisa Hassan", "President")
    .intro("Leading with vision, inspiring innovation in AI")
    .bio("Passionate about advancing AI research and fostering collaborative learning in our community.");

const VICE_PRESIDENT: Person = Person::new("Khusbu Raj", "Vice President")
    .image("https://drive.google.com/open?id=1PGdxNxCO4cIX3e2Fi7UALvF4cxHr7Flp")
    .intro("Bridging ideas and execution for impactful AI solutions")
    .bio("Dedicated to creating meaningful connections between technology and real-world applications.")
    .instagram("https://www.instagram.com/khusbu_raj_.06")
    .linkedin("https://www.linkedin.com/in/khusbu-raj-bb7571284");

const SECRETARIES: [Person; 4] = [
    Person::new("Arkabrata Roy", "General Secretary")
        .image("https://drive.google.com/open?id=1XkSQupiCx0dxAczao7_ZIxEIjGfbzdVL")
        .intro("Orchestrating excellence in every society initiative")
        .bio("Oversees society operations, partnerships, and strategic initiatives.")
        .instagram("https://www.instagram.com/_golokdhada_10")
        .linkedin("https://www.linkedin.com/in/arkabrata-roy-b006a6280/")
        .github("https://github.com/arka2024"),
    Person::new("Pratyay Bera", "Joint Secretary")
        .image("https://drive.google.com/open?id=1l-JvkRqzejRnWDYc0x4somqkCAT9mznA")
        .intro("Connecting minds, building the future of AI together")
        .bio("Coordinates cross-domain collaborations and academic programming.")
        .instagram("https://www.instagram.com/pratyay_bera_1")
        .linkedin("https://www.linkedin.com/in/pratyay-bera-52a5492ab")
        .github("https://github.com/Pratyay-Bera"),
    Person::new("Manish Dey", "Joint Secretary")
        .intro("Driving innovation through collaborative leadership")
        .bio("Coordinates cross-domain collaborations and academic programming.")
        .instagram("https://www.instagram.com/manishdey_87")
        .linkedin("https://www.linkedin.com/in/manish-dey-096029313")
        .github("https://github.com/foresto-dreamer"),
    Person::new("Venya Kejriwal", "Joint Secretary")
        .image("https://drive.google.com/open?id=1ZHEUU39uH-e2RtL9Z_J4Qd8ABBEx_Ru_")
        .intro("Empowering teams through strategic coordination")
        .bio("Coordinates cross-domain collaborations and academic programming.")
        .instagram("https://www.instagram.com/vennzss")
        .linkedin("https://www.linkedin.com/in/venya-kejriwal-5646a0333")
        .github("https://github.com/VENNZSS"),
];

const DOMAINS: [Domain; 8] = [
    Domain {
        name: "AI/ML",
        lead: Person::new("Sarthakbrata Halder", "AI/ML Lead")
            .image("https://drive.google.com/open?id=10C-hLdViTeCyxZPSkn-YRuF8ujg2utVn")
            .intro("Pushing boundaries in machine learning research")
            .bio("Interests: LLMs, Vision, MLOps.")
            .instagram("https://www.instagram.com/_shale156")
            .linkedin("https://www.linkedin.com/in/sarthakhal/")
            .github("https://github.com/Sar-Hal"),
        co_lead: Person::new("Vaibhav Bhaskar", "AI/ML Co-Lead")
            .intro("Championing ethical AI development")
            .bio("NLP, model evaluation, ethics."),
        members: &[
            Person::new("Rohan Kumar Das", "Research Member")
                .linkedin("https://www.linkedin.com/in/rohan-kumar-das-84446628b/")
                .github("https://github.com/a34656"),
            Person::new("Snehashis Mandal", "Research Member")
                .instagram("https://www.instagram.com/_smshxsnwr7_")
                .linkedin("http://linkedin.com/in/snehashismandal005")
                .github("https://github.com/IamSnehashis"),
            Person::new("Udit Senapaty", "Research Member")
                .image("https://drive.google.com/open?id=1PI88bvRUyAzeFpN1YN63M5xIcjy2YbWl")
                .linkedin("https://www.linkedin.com/in/udit-senapaty-us2004/")
                .github("https://github.com/uzzyDizzy/"),
            Person::new("Raja Das", "Research Member")
                .linkedin("https://www.linkedin.com/in/raja-das-81b1712a8"),
            Person::new("Swarnajit Mondal", "Research Member")
                .image("https://drive.google.com/open?id=1Oh1SpF-CIQm-Srl-lUTZ9y7t8oPmQYsR")
                .instagram("https://www.instagram.com/jax___noi")
                .linkedin("https://www.linkedin.com/in/swarnajit-mondal-4b782b286")
                .github("https://github.com/SWARNAJ1T"),
            Person::new("Sarthak Singh", "Research Member")
                .image("https://drive.google.com/open?id=19eU789av0iwgGswPqlC7xFOPJhUhbDYI")
                .instagram("https://www.instagram.com/sarthakk2_")
                .linkedin("https://www.linkedin.com/in/sarthak-singh-3b0488219")
                .github("https://github.com/sarthakksingh2"),
            Person::new("Prabhutva Mehta", "Research Member")
                .image("https://drive.google.com/open?id=1yvktWDI9R6Hz3MqZuYzx0io5OAq7e25U")
                .linkedin("https://www.linkedin.com/in/prabhutva-mehta-30a0b330b/")
                .github("https://github.com/Prxbhutva"),
            Person::new("Tithi Biswas", "Research Member")
                .image("https://drive.google.com/open?id=1qzmGiw_e1qfQvacna-VHEoK1XxbL06qZ")
                .linkedin("https://www.linkedin.com/in/tithi-biswas-65bba6334")
                .github("https://github.com/Tithibiswas901"),
        ],
    },
    Domain {
        name: "Web Development",
        lead: Person::new("Akshat Chauhan", "Web Dev Lead")
            .intro("The Architect of Systems")
            .bio("Full-stack, Cloud, DevOps.")
            .instagram("https://www.instagram.com/one._autumnleaf/")
            .linkedin("https://www.linkedin.com/in/akshat-chauhan-ai/")
            .github("https://github.com/AkZcH"),
        co_lead: Person::new("Mansha Mundhra", "Web Dev Co-Lead")
            .image("https://drive.google.com/open?id=1SOiwTHIp5ZgRN8W-24zl3l41JgNyfKmy")
            .intro("Crafting seamless user experiences")
            .bio("Design systems & tooling.")
            .instagram("https://www.instagram.com/manshamundhra19")
            .linkedin("https://www.linkedin.com/in/mansha-mundhra-155140283/")
            .github("https://github.com/MANSAMUNDHRA"),
        members: &[
            Person::new("Ishika Jaiswal", "Developer"),
            Person::new("Ishayan Kundu", "Developer")
                .image("https://drive.google.com/open?id=1DLtPHf6FiEO8irKCkK_1SHo1Tjass3-N")
                .instagram("https://www.instagram.com/ishayan_06")
                .linkedin("https://www.linkedin.com/in/ishayan-kundu-2790202b0")
                .github("https://github.com/Ishayan06"),
            Person::new("Satvik Upadhyaya", "Developer")
                .image("https://drive.google.com/open?id=1ECyRkxl2WFgZG6UA0xGGRBqYdWrhb0kZ")
                .instagram("https://www.instagram.com/being_shelbish")
                .linkedin("https://www.linkedin.com/in/satvik-upadhyaya-073978334/")
                .github("https://github.com/SATVIKsynopsis"),
            Person::new("Samridhi Sinha", "Developer")
                .image("https://drive.google.com/open?id=134TRrLE_UkSTQfxehf-vxsFFUGOQrWQ4")
                .instagram("https://www.instagram.com/samridhi217/")
                .linkedin("https://www.linkedin.com/in/samridhi-sinha-20b170318")
                .github("https://github.com/Samridhi024"),
        ],
    },
    Domain {
        name: "Game Development",
        lead: Person::new("Arjun Malhotra", "Game Dev Lead").bio("Unity, shaders, gameplay."),
        co_lead: Person::new("Sneha Pillai", "Game Dev Co-Lead").bio("Art direction & UX."),
        members: &[
            Person::new("Manav Kapoor", "Dev"),
            Person::new("Zoya Khan", "Level Design"),
            Person::new("Rahul S", "VFX"),
        ],
    },
    Domain {
        name: "Competitive Programming",
        lead: Person::new("Ayush Srivastava", "CP Lead").bio("ICPC, Codeforces Specialist."),
        co_lead: Person::new("Meera Bansal", "CP Co-Lead").bio("DP & Graphs."),
        members: &[
            Person::new("Nitin Joshi", "Member"),
            Person::new("Lakshmi Nair", "Member"),
            Person::new("Zubin Irani", "Member"),
        ],
    },
    Domain {
        name: "Operations & Public Relations",
        lead: Person::new("Samar Kapoor", "Ops & PR Lead").bio("Strategic ops, partnerships."),
        co_lead: Person::new("Tanya Arora", "Ops & PR Co-Lead").bio("Campus outreach."),
        members: &[
            Person::new("Raghav Jain", "Ops"),
            Person::new("Ritika Bose", "PR"),
        ],
    },
    Domain {
        name: "Broadcasting",
        lead: Person::new("Farhan Ali", "Broadcast Lead").bio("AV, livestreaming, audio ops."),
        co_lead: Person::new("Niharika S", "Broadcast Co-Lead").bio("Editing & post."),
        members: &[
            Person::new("Yash T", "AV"),
            Person::new("Payal G", "AV"),
        ],
    },
    Domain {
        name: "Social Media",
        lead: Person::new("Ritika Menon", "Social Media Lead").bio("Content strategy & analytics."),
        co_lead: Person::new("Aarav Kulkarni", "Social Media Co-Lead").bio("Calendar & copy."),
        members: &[
            Person::new("Divya P", "Content"),
            Person::new("Omkar R", "Community"),
        ],
    },
    Domain {
        name: "Graphic Design",
        lead: Person::new("Kriti Sharma", "Design Lead").bio("Brand systems & posters."),
        co_lead: Person::new("Harsh Vardhan", "Design Co-Lead").bio("Motion & layouts."),
        members: &[
            Person::new("Vaidehi S", "Designer"),
            Person::new("Pranav B", "Designer"),
        ],
    },
];

const ALUMNI: [Person; 4] = [
    Person::new("Aishwarya Rao", "Ex AI/ML Lead (Batch '24)"),
    Person::new("Siddharth Jain", "Ex Web Dev Lead (Batch '23)"),
    Person::new("Nandini Gupta", "Ex Secretary (Batch '23)"),
    Person::new("Mohit Khanna", "Ex CP Lead (Batch '22)"),
];

#[derive(Clone, Copy, PartialEq)]
enum Emphasis {
    Lead,
    CoLead,
    Member,
}

#[derive(Properties, PartialEq)]
struct MemberCardProps {
    person: Person,
    #[prop_or(Emphasis::Member)]
    emphasis: Emphasis,
}

#[function_component(MemberCard)]
fn member_card(props: &MemberCardProps) -> Html {
    let person = &props.person;
    let role_class = match props.emphasis {
        Emphasis::Lead => "member-role text-gradient",
        Emphasis::CoLead => "member-role emphasized",
        Emphasis::Member => "member-role",
    };

    html! {
        <div class={classes!(
            "card",
            "member-card",
            "hover-lift",
            "fade-in",
            (props.emphasis == Emphasis::Lead).then(|| "member-card-lead"),
        )}>
            <div class="member-portrait">
                {
                    match person.image {
                        Some(image) => html! {
                            <img src={image} alt={person.name} loading="lazy" />
                        },
                        None => html! { <Avatar name={person.name} size={96} /> },
                    }
                }
            </div>

            <h4>{person.name}</h4>
            <p class={role_class}>{person.role}</p>

            {
                match person.intro {
                    Some(intro) => html! {
                        <p class="member-intro">{format!("\u{201c}{}\u{201d}", intro)}</p>
                    },
                    None => html! {},
                }
            }
            {
                match person.bio {
                    Some(bio) => html! { <p class="member-bio">{bio}</p> },
                    None => html! {},
                }
            }

            <div class="social-row">
                { for [
                    (person.instagram, "Instagram"),
                    (person.linkedin, "LinkedIn"),
                    (person.github, "GitHub"),
                ]
                .iter()
                .filter_map(|(link, label)| {
                    link.map(|url| html! {
                        <a href={url} target="_blank" rel="noreferrer">{*label}</a>
                    })
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TeamSectionHeaderProps {
    title: String,
    subtitle: String,
}

#[function_component(TeamSectionHeader)]
fn team_section_header(props: &TeamSectionHeaderProps) -> Html {
    html! {
        <header class="section-header fade-in">
            <h2 class="text-gradient">{&props.title}</h2>
            <p class="section-subtitle">{&props.subtitle}</p>
            <div class="gradient-rule"></div>
        </header>
    }
}

#[function_component(Team)]
pub fn team() -> Html {
    // Content is gated behind a short skeleton so the grid does not pop in
    // half-laid-out.
    let loading = use_state(|| true);

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

    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(400, move || loading.set(false));
                move || drop(timeout)
            },
            (),
        );
    }

    // The reveal controller is rebuilt when the skeleton gives way to the
    // real grid, so the freshly mounted cards get registered.
    {
        use_effect_with_deps(
            move |_| {
                let mut reveal = ScrollReveal::new();
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    reveal.register_marked(&document);
                }
                move || drop(reveal)
            },
            *loading,
        );
    }

    if *loading {
        return html! { <TeamLoading /> };
    }

    html! {
        <div class="team-page">
            <section class="page-hero">
                <div class="page-main">
                    <div class="logo-circle logo-circle-large fade-in">{config::LOGO_TEXT}</div>
                    <h1 class="text-gradient fade-in">{"Meet Our Team"}</h1>
                    <p class="fade-in">
                        {"Driven by passion. United by innovation. Explore the people who power our \
                          society — faculty mentors, secretaries, domain leaders, contributors, and alumni."}
                    </p>
                </div>
            </section>

            <main class="page-main">
                <section id="faculty" class="content-section">
                    <TeamSectionHeader
                        title="Faculty-in-Charge"
                        subtitle="Academic leadership guiding our initiatives."
                    />
                    <div class="card-grid card-grid-3">
                        <MemberCard person={FACULTY_IN_CHARGE} emphasis={Emphasis::Lead} />
                    </div>
                </section>

                <section id="leadership" class="content-section">
                    <TeamSectionHeader
                        title="Leadership"
                        subtitle="Visionary leaders driving our society forward."
                    />
                    <div class="card-grid card-grid-2">
                        <MemberCard person={PRESIDENT} emphasis={Emphasis::Lead} />
                        <MemberCard person={VICE_PRESIDENT} emphasis={Emphasis::CoLead} />
                    </div>
                </section>

                <section id="secretaries" class="content-section">
                    <TeamSectionHeader
                        title="Secretaries"
                        subtitle="Operational leadership of the society."
                    />
                    <div class="card-grid card-grid-3">
                        { for SECRETARIES.iter().enumerate().map(|(index, person)| {
                            let emphasis = if index == 0 { Emphasis::Lead } else { Emphasis::CoLead };
                            html! { <MemberCard person={*person} {emphasis} /> }
                        }) }
                    </div>
                </section>

                <section id="domains" class="content-section">
                    <TeamSectionHeader
                        title="Domains"
                        subtitle="Each domain is led by a Lead and Co-Lead, supported by talented members."
                    />
                    { for DOMAINS.iter().map(|domain| html! {
                        <section class="domain-block">
                            <h3 class="text-gradient fade-in">{domain.name}</h3>
                            <div class="card-grid card-grid-2">
                                <MemberCard person={domain.lead} emphasis={Emphasis::Lead} />
                                <MemberCard person={domain.co_lead} emphasis={Emphasis::CoLead} />
                            </div>
                            <div class="card-grid card-grid-4">
                                { for domain.members.iter().map(|person| html! {
                                    <MemberCard person={*person} />
                                }) }
                            </div>
                        </section>
                    }) }
                </section>

                <section id="alumni" class="content-section">
                    <TeamSectionHeader
                        title="Alumni"
                        subtitle="Celebrating those who built the foundation and continue to inspire us."
                    />
                    <div class="card-grid card-grid-4">
                        { for ALUMNI.iter().map(|person| html! {
                            <MemberCard person={*person} />
                        }) }
                    </div>
                </section>

                <div class="closing-quote">
                    <p class="text-gradient">
                        {"\u{201c}Our strength lies in the people who power the society.\u{201d}"}
                    </p>
                </div>
            </main>
        </div>
    }
}
