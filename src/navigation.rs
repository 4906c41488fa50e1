use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::config;
use crate::links::whatsapp_link;

/// In-page anchors the menus can jump to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Services,
    Drivers,
    WhyUs,
    Gallery,
    Booking,
    Contact,
}

impl Section {
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Drivers => "drivers",
            Section::WhyUs => "why-us",
            Section::Gallery => "gallery",
            Section::Booking => "booking",
            Section::Contact => "contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim_start_matches('#');
        [
            Section::Home,
            Section::About,
            Section::Services,
            Section::Drivers,
            Section::WhyUs,
            Section::Gallery,
            Section::Booking,
            Section::Contact,
        ]
        .into_iter()
        .find(|section| section.anchor() == anchor)
    }
}

/// Entries shown in the top bar.
pub const NAV_ITEMS: [(&str, Section); 5] = [
    ("Home", Section::Home),
    ("About", Section::About),
    ("Services", Section::Services),
    ("Drivers", Section::Drivers),
    ("Contact", Section::Contact),
];

/// Smooth-scrolls to the section if it is on the current page.
pub fn scroll_to_section(section: Section) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.anchor()));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => debug!("Section #{} not on this page", section.anchor()),
    }
}

const SCROLLED_PAST: f64 = 50.0;

/// Nav turns solid once the page has moved off the hero.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_PAST
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled_state = use_state(|| false);

    {
        let is_scrolled_state = is_scrolled_state.clone();
        use_effect_with_deps(move |_| {
            let window = window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_y = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    is_scrolled_state.set(is_scrolled(scroll_y));
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = window.as_ref() {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = |section: Section| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            info!("Navigating to #{}", section.anchor());
            scroll_to_section(section);
            menu_open.set(false);
        })
    };

    let nav_links = NAV_ITEMS
        .iter()
        .map(|(label, section)| html! {
            <button class="nav-link" onclick={go_to(*section)}>{*label}</button>
        })
        .collect::<Html>();

    html! {
        <nav class={classes!("top-nav", (*is_scrolled_state).then(|| "scrolled"))}>
            <div class="nav-content">
                <span class="nav-logo">{config::COMPANY_NAME}</span>

                <div class="nav-links">
                    { nav_links.clone() }
                </div>

                <a
                    href={whatsapp_link(None)}
                    target="_blank"
                    rel="noopener noreferrer"
                    class={classes!("nav-cta", if *is_scrolled_state { "btn-primary" } else { "btn-outline" })}
                >
                    {"Book Now"}
                </a>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { nav_links }
                            <a href={whatsapp_link(None)} target="_blank" rel="noopener noreferrer" class="btn-primary">
                                {"Book Now"}
                            </a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: all 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(16px);
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-logo {
                    font-family: var(--font-display);
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fff;
                    transition: color 0.3s ease;
                }

                .top-nav.scrolled .nav-logo {
                    color: var(--primary);
                }

                .nav-links {
                    display: flex;
                    gap: 2rem;
                }

                .nav-link {
                    background: none;
                    border: none;
                    padding: 0.5rem 0.75rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #fff;
                    cursor: pointer;
                    transition: color 0.3s ease;
                }

                .nav-link:hover {
                    color: var(--accent);
                }

                .top-nav.scrolled .nav-link {
                    color: var(--foreground);
                }

                .top-nav.scrolled .nav-link:hover {
                    color: var(--primary);
                }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    color: #fff;
                    cursor: pointer;
                }

                .top-nav.scrolled .burger-menu {
                    color: var(--foreground);
                }

                .mobile-menu {
                    display: none;
                    flex-direction: column;
                    gap: 0.25rem;
                    margin: 0.5rem 1rem;
                    padding: 0.5rem;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(16px);
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    animation: menuDrop 0.4s ease;
                }

                .mobile-menu .nav-link {
                    color: var(--foreground);
                    text-align: left;
                    font-size: 1rem;
                }

                @keyframes menuDrop {
                    from { opacity: 0; transform: translateY(-20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @media (max-width: 768px) {
                    .nav-links,
                    .nav-cta {
                        display: none;
                    }

                    .burger-menu {
                        display: block;
                    }

                    .mobile-menu {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_round_trip() {
        for (_, section) in NAV_ITEMS {
            assert_eq!(Section::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(Section::from_anchor("#why-us"), Some(Section::WhyUs));
        assert_eq!(Section::from_anchor("pricing"), None);
    }

    #[test]
    fn nav_turns_solid_past_fifty_pixels() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }
}
