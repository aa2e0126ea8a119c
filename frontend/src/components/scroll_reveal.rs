use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    js_sys, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

/// Share of the region that must be on screen before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealUpdate {
    Revealed,
    Unchanged,
}

/// One-shot visibility latch for a single region.
///
/// `visible` goes `false -> true` at most once. Once it has flipped, or once
/// the region is detached, further notifications are ignored.
#[derive(Debug, Default)]
pub struct RevealState {
    visible: bool,
    observing: bool,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    pub fn attach(&mut self) {
        if !self.visible {
            self.observing = true;
        }
    }

    /// Feeds one intersection notification into the latch.
    pub fn notify(&mut self, intersection_ratio: f64) -> RevealUpdate {
        if !self.observing || self.visible {
            return RevealUpdate::Unchanged;
        }
        if intersection_ratio < REVEAL_THRESHOLD {
            return RevealUpdate::Unchanged;
        }

        self.visible = true;
        self.observing = false;
        RevealUpdate::Revealed
    }

    /// Used when the host can't observe the region at all. Showing the
    /// content beats leaving it invisible forever.
    pub fn fail_open(&mut self) -> RevealUpdate {
        self.observing = false;
        if self.visible {
            return RevealUpdate::Unchanged;
        }
        self.visible = true;
        RevealUpdate::Revealed
    }

    pub fn detach(&mut self) {
        self.observing = false;
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

fn observe_region(
    node_ref: &NodeRef,
    latch: Rc<RefCell<RevealState>>,
    visible: UseStateHandle<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let Some(element) = node_ref.cast::<Element>() else {
        warn!("Reveal region has no rendered node, showing it right away");
        return None;
    };

    let callback_latch = latch.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let update = callback_latch
                    .borrow_mut()
                    .notify(entry.intersection_ratio());
                if update == RevealUpdate::Revealed {
                    observer.disconnect();
                    visible.set(callback_latch.borrow().is_visible());
                    break;
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            latch.borrow_mut().attach();
            observer.observe(&element);
            Some((observer, callback))
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable ({:?}), showing region right away", err);
            None
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    /// Offsets when the fade starts, not when it triggers.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node_ref = use_node_ref();
    let visible = use_state(|| false);

    {
        let node_ref = node_ref.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let latch = Rc::new(RefCell::new(RevealState::new()));
                let observation = observe_region(&node_ref, latch.clone(), visible.clone());

                if observation.is_none() && latch.borrow_mut().fail_open() == RevealUpdate::Revealed {
                    visible.set(true);
                }

                move || {
                    if latch.borrow().is_observing() {
                        debug!("Reveal region unmounted before it was seen");
                    }
                    latch.borrow_mut().detach();
                    if let Some((observer, _callback)) = observation {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={node_ref}
            class={classes!("reveal", (*visible).then_some("reveal--visible"))}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attached() -> RevealState {
        let mut state = RevealState::new();
        state.attach();
        state
    }

    #[test]
    fn starts_hidden() {
        let state = RevealState::new();
        assert!(!state.is_visible());
        assert!(!state.is_observing());
    }

    #[test]
    fn reveals_at_threshold() {
        let mut state = attached();

        assert_eq!(state.notify(0.0), RevealUpdate::Unchanged);
        assert_eq!(state.notify(0.149), RevealUpdate::Unchanged);
        assert!(!state.is_visible());

        assert_eq!(state.notify(REVEAL_THRESHOLD), RevealUpdate::Revealed);
        assert!(state.is_visible());
        assert!(!state.is_observing());
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut state = attached();
        assert_eq!(state.notify(0.5), RevealUpdate::Revealed);

        // scrolling back out and in again changes nothing
        for ratio in [0.0, 1.0, 0.2, 0.0] {
            assert_eq!(state.notify(ratio), RevealUpdate::Unchanged);
            assert!(state.is_visible());
        }
    }

    #[test]
    fn stays_hidden_below_threshold() {
        let mut state = attached();
        for step in 0..150 {
            state.notify(step as f64 / 1000.0);
        }
        assert!(!state.is_visible());
        assert!(state.is_observing());
    }

    #[test]
    fn ignores_notifications_before_attach() {
        let mut state = RevealState::new();
        assert_eq!(state.notify(1.0), RevealUpdate::Unchanged);
        assert!(!state.is_visible());
    }

    #[test]
    fn detached_region_never_reveals() {
        let mut state = attached();
        state.detach();

        assert_eq!(state.notify(1.0), RevealUpdate::Unchanged);
        assert!(!state.is_visible());
        assert!(!state.is_observing());
    }

    #[test]
    fn fail_open_reveals_once() {
        let mut state = RevealState::new();
        assert_eq!(state.fail_open(), RevealUpdate::Revealed);
        assert!(state.is_visible());
        assert_eq!(state.fail_open(), RevealUpdate::Unchanged);

        state.attach();
        assert!(!state.is_observing());
    }
}
