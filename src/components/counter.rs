use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: u32,
    /// Total count-up time; the tick rate is derived from it.
    #[prop_or(1400)]
    pub duration_ms: u32,
}

/// Counts up from zero to `target`, then stops. The interval handle lives in
/// an `Rc<RefCell<Option<_>>>` so the tick closure can cancel itself once the
/// target is reached; unmount drops whatever is left.
#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let value = use_state(|| 0u32);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |(target, duration_ms)| {
                let target = *target;
                let step_ms = (duration_ms / target.max(1)).max(12);

                let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let handle_clone = handle.clone();

                let mut current = 0u32;
                let interval = Interval::new(step_ms, move || {
                    current = (current + 1).min(target);
                    value.set(current);
                    if current >= target {
                        if let Some(interval) = handle.borrow_mut().take() {
                            drop(interval);
                        }
                    }
                });
                *handle_clone.borrow_mut() = Some(interval);

                move || {
                    if let Some(interval) = handle_clone.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            (props.target, props.duration_ms),
        );
    }

    html! {
        <p class="stat-value">{*value}</p>
    }
}
