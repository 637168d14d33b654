use chrono::NaiveDate;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::scroll_reveal::use_scroll_reveal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EventKind {
    Workshop,
    Lecture,
    Competition,
    Conference,
    StudyGroup,
}

impl EventKind {
    const ALL: [EventKind; 5] = [
        EventKind::Workshop,
        EventKind::Lecture,
        EventKind::Competition,
        EventKind::Conference,
        EventKind::StudyGroup,
    ];

    fn value(self) -> &'static str {
        match self {
            EventKind::Workshop => "workshop",
            EventKind::Lecture => "lecture",
            EventKind::Competition => "competition",
            EventKind::Conference => "conference",
            EventKind::StudyGroup => "study-group",
        }
    }

    fn label(self) -> &'static str {
        match self {
            EventKind::Workshop => "Workshop",
            EventKind::Lecture => "Lecture",
            EventKind::Competition => "Competition",
            EventKind::Conference => "Conference",
            EventKind::StudyGroup => "Study Group",
        }
    }

    fn plural_label(self) -> &'static str {
        match self {
            EventKind::Workshop => "Workshops",
            EventKind::Lecture => "Lectures",
            EventKind::Competition => "Competitions",
            EventKind::Conference => "Conferences",
            EventKind::StudyGroup => "Study Groups",
        }
    }

    fn badge_class(self) -> &'static str {
        match self {
            EventKind::Workshop => "badge badge-blue",
            EventKind::Lecture => "badge badge-green",
            EventKind::Competition => "badge badge-red",
            EventKind::Conference => "badge badge-purple",
            EventKind::StudyGroup => "badge badge-yellow",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.value() == value)
    }
}

struct UpcomingEvent {
    title: &'static str,
    date: &'static str,
    time: &'static str,
    location: &'static str,
    kind: EventKind,
    description: &'static str,
    capacity: u32,
    registered: u32,
}

const UPCOMING_EVENTS: [UpcomingEvent; 6] = [
    UpcomingEvent {
        title: "AI Ethics Workshop",
        date: "2024-02-15",
        time: "2:00 PM - 5:00 PM",
        location: "Computer Science Building, Room 101",
        kind: EventKind::Workshop,
        description: "Deep dive into ethical considerations in AI development, including bias detection, fairness metrics, and responsible deployment strategies.",
        capacity: 50,
        registered: 32,
    },
    UpcomingEvent {
        title: "Machine Learning Hackathon",
        date: "2024-02-22",
        time: "9:00 AM - 9:00 PM",
        location: "Innovation Hub",
        kind: EventKind::Competition,
        description: "48-hour intensive coding competition focusing on real-world ML problems. Teams of 3-4 students compete for prizes worth $5000.",
        capacity: 120,
        registered: 89,
    },
    UpcomingEvent {
        title: "Guest Lecture: Dr. Sarah Kim - Medical AI",
        date: "2024-03-01",
        time: "6:00 PM - 7:30 PM",
        location: "Auditorium A",
        kind: EventKind::Lecture,
        description: "Latest research insights in deep learning applications for medical imaging, including diagnostic accuracy improvements and clinical deployment challenges.",
        capacity: 200,
        registered: 156,
    },
    UpcomingEvent {
        title: "Natural Language Processing Workshop",
        date: "2024-03-08",
        time: "1:00 PM - 4:00 PM",
        location: "Lab 205",
        kind: EventKind::Workshop,
        description: "Hands-on session covering transformer architectures, fine-tuning BERT models, and building chatbots with modern NLP techniques.",
        capacity: 30,
        registered: 28,
    },
    UpcomingEvent {
        title: "AI Research Symposium",
        date: "2024-03-15",
        time: "9:00 AM - 6:00 PM",
        location: "Main Campus Center",
        kind: EventKind::Conference,
        description: "Annual symposium featuring student research presentations, industry panel discussions, and networking opportunities with leading AI researchers.",
        capacity: 300,
        registered: 203,
    },
    UpcomingEvent {
        title: "Computer Vision Study Group",
        date: "2024-03-22",
        time: "3:00 PM - 5:00 PM",
        location: "Study Room 12",
        kind: EventKind::StudyGroup,
        description: "Weekly study group focusing on recent papers in computer vision, object detection, and image segmentation techniques.",
        capacity: 15,
        registered: 12,
    },
];

struct PastEvent {
    title: &'static str,
    date: &'static str,
    attendees: u32,
    kind: EventKind,
}

const PAST_EVENTS: [PastEvent; 3] = [
    PastEvent {
        title: "Introduction to Deep Learning",
        date: "2024-01-20",
        attendees: 85,
        kind: EventKind::Workshop,
    },
    PastEvent {
        title: "AI in Healthcare Panel",
        date: "2024-01-15",
        attendees: 120,
        kind: EventKind::Lecture,
    },
    PastEvent {
        title: "Python for ML Bootcamp",
        date: "2024-01-10",
        attendees: 67,
        kind: EventKind::Workshop,
    },
];

fn long_date(iso: &str) -> String {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|date| date.format("%A, %B %e, %Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

fn short_date(iso: &str) -> String {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|date| date.format("%B %e, %Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

#[function_component(Events)]
pub fn events() -> Html {
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

    // None means "all events".
    let filter = use_state(|| None::<EventKind>);

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            filter.set(EventKind::parse(&select.value()));
        })
    };

    let filtered: Vec<&UpcomingEvent> = UPCOMING_EVENTS
        .iter()
        .filter(|event| filter.map_or(true, |kind| event.kind == kind))
        .collect();

    html! {
        <div class="events-page">
            <section class="page-hero">
                <div class="page-main">
                    <h1 class="fade-in">{"Events & Activities"}</h1>
                    <p class="fade-in">
                        {"Join us for workshops, lectures, competitions, and study groups designed to \
                          expand your AI knowledge and connect with the community."}
                    </p>
                </div>
            </section>

            <section class="section">
                <div class="page-main">
                    <div class="section-toolbar">
                        <h2 class="fade-in">{"Upcoming Events"}</h2>
                        <div class="filter-control fade-in">
                            <label for="event-filter">{"Filter"}</label>
                            <select id="event-filter" onchange={on_filter_change}>
                                <option value="all" selected={filter.is_none()}>{"All Events"}</option>
                                { for EventKind::ALL.iter().map(|kind| html! {
                                    <option
                                        value={kind.value()}
                                        selected={*filter == Some(*kind)}
                                    >
                                        {kind.plural_label()}
                                    </option>
                                }) }
                            </select>
                        </div>
                    </div>

                    <div class="card-grid card-grid-2 fade-in">
                        { for filtered.iter().map(|event| {
                            let fill = (event.registered as f64 / event.capacity as f64) * 100.0;
                            html! {
                                <div class="card hover-lift">
                                    <div class="card-meta">
                                        <span class={event.kind.badge_class()}>{event.kind.label()}</span>
                                        <div class="capacity">
                                            <span class="capacity-text">
                                                {format!("{}/{} registered", event.registered, event.capacity)}
                                            </span>
                                            <div class="progress-track">
                                                <div
                                                    class="progress-fill"
                                                    style={format!("width: {:.0}%;", fill)}
                                                ></div>
                                            </div>
                                        </div>
                                    </div>

                                    <h3>{event.title}</h3>

                                    <ul class="detail-list">
                                        <li>{long_date(event.date)}</li>
                                        <li>{event.time}</li>
                                        <li>{event.location}</li>
                                        <li>{format!("Capacity: {} participants", event.capacity)}</li>
                                    </ul>

                                    <p>{event.description}</p>

                                    <button class="button-primary button-full">{"Register Now"}</button>
                                </div>
                            }
                        }) }
                    </div>

                    {
                        if filtered.is_empty() {
                            html! {
                                <div class="empty-state">
                                    <h3>{"No events found"}</h3>
                                    <p>{"Try adjusting your filter or check back later for new events."}</p>
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
                    <h2 class="section-title fade-in">{"Past Events"}</h2>
                    <div class="card-grid card-grid-3">
                        { for PAST_EVENTS.iter().map(|event| html! {
                            <div class="card card-centered fade-in">
                                <span class={event.kind.badge_class()}>{event.kind.label()}</span>
                                <h3>{event.title}</h3>
                                <p>{short_date(event.date)}</p>
                                <p class="muted">{format!("{} attendees", event.attendees)}</p>
                            </div>
                        }) }
                    </div>
                    <div class="section-cta fade-in">
                        <button class="button-secondary">{"View All Past Events"}</button>
                    </div>
                </div>
            </section>

            <section class="section cta-banner">
                <div class="page-main">
                    <h2 class="fade-in">{"Never Miss an Event"}</h2>
                    <p class="fade-in">
                        {"Subscribe to our newsletter to get notified about upcoming events, workshops, \
                          and exclusive opportunities."}
                    </p>
                    <div class="subscribe-row fade-in">
                        <input type="email" placeholder="Enter your email" />
                        <button class="button-secondary">{"Subscribe"}</button>
                    </div>
                </div>
            </section>
        </div>
    }
}
