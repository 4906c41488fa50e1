use yew::prelude::*;

use crate::animation::options::{Easing, RevealOptions};
use crate::animation::reveal::{use_reveal, RevealScope};
use crate::links::whatsapp_link;
use crate::navigation::{scroll_to_section, Section};

// Entrance sequence. Each step overlaps the tail of the one before it.
const TITLE_AT: f64 = 0.5;
const SUBTITLE_AT: f64 = TITLE_AT + 1.2 - 0.8;
const CTA_AT: f64 = SUBTITLE_AT + 1.0 - 0.6;
const FEATURES_AT: f64 = CTA_AT + 0.8 - 0.4;

/// The hero is on screen at load, so its reveals use the full viewport as threshold.
fn entrance(options: RevealOptions, at: f64) -> RevealOptions {
    options.with_threshold(1.0).with_delay(at)
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let title_ref = use_node_ref();
    let subtitle_ref = use_node_ref();
    let cta_ref = use_node_ref();
    let features_ref = use_node_ref();

    use_reveal(
        title_ref.clone(),
        RevealScope::Element,
        entrance(RevealOptions::rise(100.0).with_duration(1.2), TITLE_AT),
    );
    use_reveal(
        subtitle_ref.clone(),
        RevealScope::Element,
        entrance(RevealOptions::rise(60.0).with_duration(1.0), SUBTITLE_AT),
    );
    use_reveal(
        cta_ref.clone(),
        RevealScope::Element,
        entrance(RevealOptions::rise(40.0), CTA_AT),
    );
    use_reveal(
        features_ref.clone(),
        RevealScope::Children,
        entrance(RevealOptions::slide(-50.0).with_duration(0.6).with_stagger(0.2), FEATURES_AT),
    );

    let to_services = Callback::from(|_: MouseEvent| scroll_to_section(Section::Services));

    html! {
        <section id="home" class="hero-section">
            <div class="hero-overlay"></div>

            <div class="hero-floaters">
                {
                    ["floater-a", "floater-b", "floater-c"].iter().enumerate().map(|(i, class)| html! {
                        <div
                            class={classes!("float-element", *class)}
                            style={format!("animation-timing-function: {}; animation-delay: {}s;", Easing::Power2InOut.css(), i)}
                        ></div>
                    }).collect::<Html>()
                }
            </div>

            <div class="hero-content">
                <h1 ref={title_ref} class="hero-text">
                    {"Safe, Reliable &"}<br />
                    <span class="text-accent">{"Professional"}</span><br />
                    {"Transport Services"}
                </h1>

                <p ref={subtitle_ref} class="hero-subtitle">
                    {"Premium shuttle services, tours, and private hire solutions across Cape Town & Johannesburg. Your trusted transport partner in South Africa."}
                </p>

                <div ref={cta_ref} class="hero-cta">
                    <a href={whatsapp_link(None)} target="_blank" rel="noopener noreferrer" class="btn-accent">
                        {"Book Your Journey →"}
                    </a>
                    <button class="btn-outline" onclick={to_services}>{"Our Services"}</button>
                </div>

                <div ref={features_ref} class="hero-features">
                    <div class="hero-feature"><span class="text-accent">{"🛡"}</span>{"Safety First"}</div>
                    <div class="hero-feature"><span class="text-accent">{"◷"}</span>{"Always On Time"}</div>
                    <div class="hero-feature"><span class="text-accent">{"★"}</span>{"Premium Service"}</div>
                </div>
            </div>

            <style>
                {r#"
                .hero-section {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background-image: url('/assets/hero.jpg');
                    background-size: cover;
                    background-position: center;
                    background-attachment: fixed;
                }

                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: var(--gradient-overlay);
                }

                .hero-floaters {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }

                .float-element {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(24px);
                    animation-name: heroFloat;
                    animation-duration: 4s;
                    animation-iteration-count: infinite;
                    animation-direction: alternate;
                }

                .floater-a {
                    top: 5rem;
                    left: 2.5rem;
                    width: 8rem;
                    height: 8rem;
                    background: rgba(249, 115, 22, 0.1);
                }

                .floater-b {
                    bottom: 10rem;
                    right: 5rem;
                    width: 12rem;
                    height: 12rem;
                    background: rgba(37, 99, 235, 0.1);
                }

                .floater-c {
                    top: 50%;
                    left: 25%;
                    width: 6rem;
                    height: 6rem;
                    background: rgba(255, 255, 255, 0.05);
                }

                @keyframes heroFloat {
                    from { transform: translateY(0); }
                    to { transform: translateY(-30px); }
                }

                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 2rem;
                    text-align: center;
                }

                .hero-text {
                    font-family: var(--font-display);
                    font-size: clamp(3rem, 7vw, 4.5rem);
                    font-weight: 700;
                    line-height: 1.1;
                    color: #fff;
                    margin-bottom: 1.5rem;
                }

                .hero-subtitle {
                    font-size: clamp(1.25rem, 2.5vw, 1.5rem);
                    color: rgba(255, 255, 255, 0.9);
                    line-height: 1.6;
                    max-width: 48rem;
                    margin: 0 auto 2rem;
                }

                .hero-cta {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    margin-bottom: 4rem;
                }

                .hero-features {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .hero-feature {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-weight: 600;
                    color: rgba(255, 255, 255, 0.9);
                }

                @media (max-width: 640px) {
                    .hero-cta {
                        flex-direction: column;
                    }

                    .hero-features {
                        grid-template-columns: 1fr;
                    }

                    .hero-feature {
                        justify-content: center;
                    }
                }
                "#}
            </style>
        </section>
    }
}
