use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupPhase {
    Hidden,
    Shown,
    Minimized,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopupSchedule {
    pub show_after_ms: u32,
    pub read_time_ms: u32,
}

impl Default for PopupSchedule {
    fn default() -> Self {
        Self {
            show_after_ms: config::POPUP_SHOW_DELAY_MS,
            read_time_ms: config::POPUP_READ_TIME_MS,
        }
    }
}

impl PopupSchedule {
    /// Deadline of the auto-minimize timer, counted from mount.
    pub fn minimize_at_ms(&self) -> u32 {
        self.show_after_ms.saturating_add(self.read_time_ms)
    }
}

/// Developer credit popup state for one page session.
///
/// Both automatic transitions are one-shot: the popup shows once, and
/// auto-minimizes at most once, `read_time_ms` after it actually showed.
/// Manual minimize/restore only works once the popup has appeared.
#[derive(Clone, Debug, PartialEq)]
pub struct PopupLifecycle {
    schedule: PopupSchedule,
    phase: PopupPhase,
    shown_at_ms: Option<u32>,
    auto_minimized: bool,
}

impl PopupLifecycle {
    pub fn new(schedule: PopupSchedule) -> Self {
        Self {
            schedule,
            phase: PopupPhase::Hidden,
            shown_at_ms: None,
            auto_minimized: false,
        }
    }

    pub fn phase(&self) -> PopupPhase {
        self.phase
    }

    pub fn schedule(&self) -> PopupSchedule {
        self.schedule
    }

    /// Fires every automatic transition that is due at `elapsed_ms` after
    /// mount. Returns whether the phase changed.
    pub fn advance_to(&mut self, elapsed_ms: u32) -> bool {
        let before = self.phase;

        if self.shown_at_ms.is_none() && elapsed_ms >= self.schedule.show_after_ms {
            self.phase = PopupPhase::Shown;
            self.shown_at_ms = Some(elapsed_ms);
        }

        if let Some(shown_at) = self.shown_at_ms {
            let due = shown_at.saturating_add(self.schedule.read_time_ms);
            if !self.auto_minimized && elapsed_ms >= due {
                // Already minimized by hand is fine, this just re-applies it.
                self.auto_minimized = true;
                self.phase = PopupPhase::Minimized;
            }
        }

        before != self.phase
    }

    pub fn minimize(&mut self) -> bool {
        if self.phase != PopupPhase::Shown {
            return false;
        }
        self.phase = PopupPhase::Minimized;
        true
    }

    pub fn restore(&mut self) -> bool {
        if self.phase != PopupPhase::Minimized {
            return false;
        }
        self.phase = PopupPhase::Shown;
        true
    }
}

pub enum PopupAction {
    /// A scheduled timer fired this many milliseconds after mount.
    Elapsed(u32),
    Minimize,
    Restore,
}

impl Reducible for PopupLifecycle {
    type Action = PopupAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            PopupAction::Elapsed(elapsed_ms) => next.advance_to(elapsed_ms),
            PopupAction::Minimize => next.minimize(),
            PopupAction::Restore => next.restore(),
        };

        if !changed {
            return self;
        }
        debug!("Developer popup {:?} -> {:?}", self.phase, next.phase);
        Rc::new(next)
    }
}

#[function_component(DevPopup)]
pub fn dev_popup() -> Html {
    let lifecycle = use_reducer_eq(|| PopupLifecycle::new(PopupSchedule::default()));

    // Armed once per mount. Dropping the handles on unmount cancels
    // whatever hasn't fired yet.
    {
        let dispatcher = lifecycle.dispatcher();
        let schedule = lifecycle.schedule();
        use_effect_with_deps(
            move |_| {
                let timers: Vec<Timeout> = [schedule.show_after_ms, schedule.minimize_at_ms()]
                    .into_iter()
                    .map(|at_ms| {
                        let dispatcher = dispatcher.clone();
                        Timeout::new(at_ms, move || dispatcher.dispatch(PopupAction::Elapsed(at_ms)))
                    })
                    .collect();

                move || drop(timers)
            },
            (),
        );
    }

    match lifecycle.phase() {
        PopupPhase::Hidden => html! {},
        PopupPhase::Minimized => {
            let restore = {
                let lifecycle = lifecycle.clone();
                Callback::from(move |_: MouseEvent| lifecycle.dispatch(PopupAction::Restore))
            };
            html! {
                <div class="dev-popup dev-popup--minimized">
                    <button class="dev-popup-restore" onclick={restore} title="Maximizar Créditos">
                        {"</>"}
                    </button>
                </div>
            }
        }
        PopupPhase::Shown => {
            let minimize = {
                let lifecycle = lifecycle.clone();
                Callback::from(move |_: MouseEvent| lifecycle.dispatch(PopupAction::Minimize))
            };
            html! {
                <div class="dev-popup">
                    <div class="dev-popup-card">
                        <button class="dev-popup-minimize" onclick={minimize} title="Minimizar">
                            {"–"}
                        </button>
                        <div class="dev-popup-header">
                            <div class="dev-popup-logo">{"</>"}</div>
                            <div>
                                <h4>{"UiCode.dev"}</h4>
                                <p class="dev-popup-tagline">{"Desenvolvimento Web"}</p>
                            </div>
                        </div>
                        <p class="dev-popup-text">
                            {"Gostou deste site? Crie uma presença digital profissional para o seu negócio hoje mesmo."}
                        </p>
                        <div class="dev-popup-links">
                            <a href={config::DEVELOPER_INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" class="dev-popup-instagram">
                                {"Instagram"}
                            </a>
                            <a href={config::DEVELOPER_WHATSAPP_URL} target="_blank" rel="noopener noreferrer" class="dev-popup-whatsapp">
                                {"WhatsApp"}
                            </a>
                        </div>
                    </div>
                </div>
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lifecycle() -> PopupLifecycle {
        PopupLifecycle::new(PopupSchedule::default())
    }

    #[test]
    fn scripted_sequence_without_interaction() {
        let mut popup = lifecycle();

        popup.advance_to(3999);
        assert_eq!(popup.phase(), PopupPhase::Hidden);

        popup.advance_to(4001);
        assert_eq!(popup.phase(), PopupPhase::Shown);

        popup.advance_to(9001);
        assert_eq!(popup.phase(), PopupPhase::Minimized);
    }

    #[test]
    fn timer_deadlines_drive_the_sequence() {
        let mut popup = lifecycle();
        let schedule = popup.schedule();

        assert!(popup.advance_to(schedule.show_after_ms));
        assert_eq!(popup.phase(), PopupPhase::Shown);
        assert!(popup.advance_to(schedule.minimize_at_ms()));
        assert_eq!(popup.phase(), PopupPhase::Minimized);
    }

    #[test]
    fn manual_minimize_before_auto_minimize() {
        let mut popup = lifecycle();
        popup.advance_to(4001);

        assert!(popup.minimize());
        popup.advance_to(4500);
        assert_eq!(popup.phase(), PopupPhase::Minimized);

        assert!(!popup.advance_to(9001));
        assert_eq!(popup.phase(), PopupPhase::Minimized);
    }

    #[test]
    fn restore_before_deadline_gets_minimized_once() {
        let mut popup = lifecycle();
        popup.advance_to(4000);
        popup.minimize();
        assert!(popup.restore());

        assert!(popup.advance_to(9000));
        assert_eq!(popup.phase(), PopupPhase::Minimized);

        // the auto-minimize has been spent
        assert!(popup.restore());
        assert!(!popup.advance_to(20_000));
        assert_eq!(popup.phase(), PopupPhase::Shown);
    }

    #[test]
    fn manual_toggling_is_unlimited() {
        let mut popup = lifecycle();
        popup.advance_to(4000);
        popup.advance_to(9000);
        assert_eq!(popup.phase(), PopupPhase::Minimized);

        for _ in 0..10 {
            assert!(popup.restore());
            assert_eq!(popup.phase(), PopupPhase::Shown);
            assert!(popup.minimize());
            assert_eq!(popup.phase(), PopupPhase::Minimized);
        }
    }

    #[test]
    fn manual_actions_ignored_while_hidden() {
        let mut popup = lifecycle();
        assert!(!popup.minimize());
        assert!(!popup.restore());
        assert_eq!(popup.phase(), PopupPhase::Hidden);
    }

    #[test]
    fn late_show_measures_read_time_from_showing() {
        let mut popup = lifecycle();

        // both deadlines land in one late tick: show now, don't minimize yet
        assert!(popup.advance_to(9000));
        assert_eq!(popup.phase(), PopupPhase::Shown);

        popup.advance_to(13_999);
        assert_eq!(popup.phase(), PopupPhase::Shown);
        popup.advance_to(14_000);
        assert_eq!(popup.phase(), PopupPhase::Minimized);
    }

    #[test]
    fn shows_only_once() {
        let mut popup = lifecycle();
        popup.advance_to(4000);
        popup.minimize();

        assert!(!popup.advance_to(4000));
        assert_eq!(popup.phase(), PopupPhase::Minimized);
    }

    #[test]
    fn reducer_keeps_state_when_nothing_changes() {
        let popup = Rc::new(lifecycle());
        let same = popup.clone().reduce(PopupAction::Minimize);
        assert!(Rc::ptr_eq(&popup, &same));

        let shown = popup.reduce(PopupAction::Elapsed(4000));
        assert_eq!(shown.phase(), PopupPhase::Shown);
        let minimized = shown.reduce(PopupAction::Minimize);
        assert_eq!(minimized.phase(), PopupPhase::Minimized);
        assert_eq!(minimized.reduce(PopupAction::Restore).phase(), PopupPhase::Shown);
    }
}
