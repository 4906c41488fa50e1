use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::links::{open_in_new_context, whatsapp_link};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatAction {
    Show,
    HideTooltip,
}

/// The floating chat button starts hidden with its tooltip armed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FloatState {
    pub visible: bool,
    pub tooltip: bool,
}

impl Default for FloatState {
    fn default() -> Self {
        Self {
            visible: false,
            tooltip: true,
        }
    }
}

impl FloatState {
    pub fn apply(self, action: FloatAction) -> Self {
        match action {
            FloatAction::Show => Self {
                visible: true,
                ..self
            },
            FloatAction::HideTooltip => Self {
                tooltip: false,
                ..self
            },
        }
    }

    pub fn shows_tooltip(&self) -> bool {
        self.visible && self.tooltip
    }
}

impl Reducible for FloatState {
    type Action = FloatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[function_component(WhatsAppFloat)]
pub fn whatsapp_float() -> Html {
    let state = use_reducer(FloatState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let show = {
                    let dispatcher = dispatcher.clone();
                    Timeout::new(config::WHATSAPP_FLOAT_DELAY_MS, move || {
                        dispatcher.dispatch(FloatAction::Show)
                    })
                };
                let hide_tooltip = Timeout::new(config::WHATSAPP_TOOLTIP_HIDE_MS, move || {
                    dispatcher.dispatch(FloatAction::HideTooltip)
                });

                // Dropping a pending Timeout cancels it.
                move || {
                    drop(show);
                    drop(hide_tooltip);
                }
            },
            (),
        );
    }

    if !state.visible {
        return html! {};
    }

    let dismiss = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            dispatcher.dispatch(FloatAction::HideTooltip);
        })
    };

    let open_chat = Callback::from(|_: MouseEvent| {
        debug!("Opening WhatsApp chat");
        open_in_new_context(&whatsapp_link(Some(config::WHATSAPP_GREETING)));
    });

    html! {
        <div class="wa-float">
            {
                if state.shows_tooltip() {
                    html! {
                        <div class="wa-tooltip">
                            <button class="wa-tooltip-close" onclick={dismiss} aria-label="Dismiss">{"✕"}</button>
                            <p>{"Need quick assistance? Chat with us on WhatsApp!"}</p>
                            <div class="wa-tooltip-arrow"></div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <button class="wa-button" onclick={open_chat} aria-label="Chat on WhatsApp">
                <span class="wa-ping"></span>
                <span class="wa-icon">{"💬"}</span>
            </button>

            <style>
                {r#"
                .wa-float {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    z-index: 50;
                }

                .wa-tooltip {
                    position: absolute;
                    right: 0;
                    bottom: 100%;
                    margin-bottom: 0.5rem;
                    width: 16rem;
                    background: #fff;
                    border-radius: 0.5rem;
                    padding: 0.75rem;
                    box-shadow: var(--shadow-large);
                    animation: waBounce 1s infinite;
                }

                .wa-tooltip p {
                    margin: 0;
                    padding-right: 1rem;
                    font-size: 0.875rem;
                    color: #1f2937;
                }

                .wa-tooltip-close {
                    position: absolute;
                    top: -0.5rem;
                    right: -0.5rem;
                    width: 1.5rem;
                    height: 1.5rem;
                    border: none;
                    border-radius: 50%;
                    background: #f3f4f6;
                    color: #4b5563;
                    font-size: 0.75rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .wa-tooltip-close:hover {
                    background: #e5e7eb;
                }

                .wa-tooltip-arrow {
                    position: absolute;
                    right: 1rem;
                    bottom: 0;
                    width: 0.5rem;
                    height: 0.5rem;
                    background: #fff;
                    transform: translateY(50%) rotate(45deg);
                }

                .wa-button {
                    position: relative;
                    width: 3.5rem;
                    height: 3.5rem;
                    border: none;
                    border-radius: 50%;
                    background: #22c55e;
                    color: #fff;
                    cursor: pointer;
                    overflow: hidden;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                    transition: transform 0.3s ease, background 0.3s ease;
                }

                .wa-button:hover {
                    transform: scale(1.1);
                    background: #16a34a;
                }

                .wa-ping {
                    position: absolute;
                    inset: 0;
                    border-radius: 50%;
                    background: #22c55e;
                    opacity: 0.75;
                    animation: waPing 1s cubic-bezier(0, 0, 0.2, 1) infinite;
                }

                .wa-icon {
                    position: relative;
                    z-index: 1;
                    font-size: 1.5rem;
                }

                @keyframes waPing {
                    75%, 100% { transform: scale(2); opacity: 0; }
                }

                @keyframes waBounce {
                    0%, 100% { transform: translateY(-25%); }
                    50% { transform: none; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_with_tooltip_armed() {
        let state = FloatState::default();
        assert!(!state.visible);
        assert!(!state.shows_tooltip());
    }

    #[test]
    fn shown_button_carries_tooltip_until_hidden() {
        let shown = FloatState::default().apply(FloatAction::Show);
        assert!(shown.shows_tooltip());
        let quiet = shown.apply(FloatAction::HideTooltip);
        assert!(quiet.visible);
        assert!(!quiet.shows_tooltip());
    }

    #[test]
    fn tooltip_dismissed_before_show_stays_gone() {
        let state = FloatState::default()
            .apply(FloatAction::HideTooltip)
            .apply(FloatAction::Show);
        assert!(state.visible);
        assert!(!state.tooltip);
    }

    #[test]
    fn reduce_keeps_identity_when_nothing_changes() {
        let shown = Rc::new(FloatState::default().apply(FloatAction::Show));
        let again = shown.clone().reduce(FloatAction::Show);
        assert!(Rc::ptr_eq(&shown, &again));
    }
}
