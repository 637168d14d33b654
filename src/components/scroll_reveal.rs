use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

use crate::reveal::{
    visible_fraction, Registration, RevealTracker, BOTTOM_INSET_PX, REVEAL_THRESHOLD,
};

/// Marker class pages put on blocks that should fade in on scroll.
pub const TARGET_CLASS: &str = "fade-in";

/// Class appended once an element is revealed; the stylesheet owns the
/// actual transition.
const REVEALED_CLASS: &str = "visible";

/// Per-element delay for elements revealed together at registration time.
/// Purely cosmetic; outcomes are identical if the delay is skipped.
const STAGGER_STEP_MS: u32 = 120;

struct Shared {
    tracker: RevealTracker<usize>,
    elements: Vec<Element>,
}

impl Shared {
    fn key_of(&self, element: &Element) -> Option<usize> {
        self.elements.iter().position(|e| e == element)
    }
}

/// Watches registered elements and flips them to `visible` the first time
/// they intersect the trigger window. Wraps the pure `RevealTracker` with an
/// IntersectionObserver; when the observer cannot be constructed the
/// controller fails open and reveals everything at registration.
pub struct ScrollReveal {
    shared: Rc<RefCell<Shared>>,
    observer: Option<IntersectionObserver>,
    // Keeps the observer callback alive for the observer's lifetime.
    _callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
}

impl ScrollReveal {
    pub fn new() -> Self {
        let shared = Rc::new(RefCell::new(Shared {
            tracker: RevealTracker::new(),
            elements: Vec::new(),
        }));

        let callback_shared = shared.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let mut shared = callback_shared.borrow_mut();
                    if let Some(key) = shared.key_of(&target) {
                        if shared.tracker.mark_entered(&key) {
                            // One-way transition: nothing more to watch.
                            observer.unobserve(&target);
                            apply_reveal(&target, 0);
                        }
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let mut options = IntersectionObserverInit::new();
        options.threshold(&JsValue::from(REVEAL_THRESHOLD));
        options.root_margin(&format!("0px 0px -{}px 0px", BOTTOM_INSET_PX as i32));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => Self {
                shared,
                observer: Some(observer),
                _callback: Some(callback),
            },
            Err(_) => {
                // Fail open: without the intersection primitive everything
                // is revealed up front instead of staying hidden.
                warn!("IntersectionObserver unavailable, revealing all content immediately");
                Self {
                    shared,
                    observer: None,
                    _callback: None,
                }
            }
        }
    }

    /// Register every element carrying the marker class.
    pub fn register_marked(&mut self, document: &Document) {
        let Ok(nodes) = document.query_selector_all(&format!(".{}", TARGET_CLASS)) else {
            return;
        };
        for index in 0..nodes.length() {
            if let Some(element) = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                self.register(element);
            }
        }
    }

    /// Start watching an element. Elements already inside the trigger
    /// window reveal immediately (staggered per element); duplicate
    /// registrations are no-ops.
    pub fn register(&mut self, element: Element) {
        let mut shared = self.shared.borrow_mut();
        let key = match shared.key_of(&element) {
            Some(key) => key,
            None => {
                shared.elements.push(element.clone());
                shared.elements.len() - 1
            }
        };

        let in_view = match &self.observer {
            Some(_) => element_in_view(&element),
            None => true,
        };

        match shared.tracker.register(key, in_view) {
            Registration::AlreadyTracked => {}
            Registration::Watch => {
                if let Some(observer) = &self.observer {
                    observer.observe(&element);
                }
            }
            Registration::RevealNow { order } => {
                let delay = if self.observer.is_some() {
                    order as u32 * STAGGER_STEP_MS
                } else {
                    0
                };
                apply_reveal(&element, delay);
            }
        }
    }

    /// Stop watching an element. Safe on elements that were never
    /// registered or have already been revealed.
    pub fn unregister(&mut self, element: &Element) {
        let mut shared = self.shared.borrow_mut();
        if let Some(key) = shared.key_of(element) {
            if shared.tracker.unregister(&key) {
                if let Some(observer) = &self.observer {
                    observer.unobserve(element);
                }
            }
        }
    }

    /// Unregister everything still tracked and release the observer. Called
    /// on drop, so tearing down the owning page is enough.
    fn teardown(&mut self) {
        let elements = self.shared.borrow().elements.clone();
        for element in &elements {
            self.unregister(element);
        }
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn element_in_view(element: &Element) -> bool {
    let Some(viewport_height) = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
    else {
        return false;
    };
    let rect = element.get_bounding_client_rect();
    visible_fraction(rect.top(), rect.height(), viewport_height, BOTTOM_INSET_PX)
        >= REVEAL_THRESHOLD
}

fn apply_reveal(element: &Element, delay_ms: u32) {
    if delay_ms == 0 {
        set_revealed_class(element);
    } else {
        let element = element.clone();
        Timeout::new(delay_ms, move || set_revealed_class(&element)).forget();
    }
}

fn set_revealed_class(element: &Element) {
    let classes = element.class_name();
    if !classes.split_whitespace().any(|c| c == REVEALED_CLASS) {
        element.set_class_name(&format!("{} {}", classes, REVEALED_CLASS));
    }
}

/// Ties a `ScrollReveal` controller to the calling page's lifetime: marked
/// elements are registered after first render, and the observer is torn
/// down when the page unmounts.
#[hook]
pub fn use_scroll_reveal() {
    use_effect_with_deps(
        |_| {
            let mut reveal = ScrollReveal::new();
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                reveal.register_marked(&document);
            }
            move || drop(reveal)
        },
        (),
    );
}
