use yew::prelude::*;

use crate::animation::options::RevealOptions;
use crate::animation::reveal::{use_reveal, RevealItem, RevealScope};

const VALUES: [(&str, &str, &str); 6] = [
    ("🛡", "Integrity", "Honest, transparent service built on trust and reliability."),
    ("👥", "Customer Focus", "Your satisfaction is our top priority in every journey."),
    ("🏆", "Excellence", "Delivering the highest standards in transport services."),
    ("🎯", "Innovation", "Embracing modern solutions for seamless travel experiences."),
    ("🛡", "Safety", "Unwavering commitment to passenger and driver safety."),
    ("♥", "Trust", "Building lasting relationships through dependable service."),
];

#[function_component(About)]
pub fn about() -> Html {
    let image_ref = use_node_ref();
    let content_ref = use_node_ref();

    use_reveal(
        image_ref.clone(),
        RevealScope::Element,
        RevealOptions::slide(-100.0).with_scale(0.9).with_duration(1.2),
    );
    use_reveal(
        content_ref.clone(),
        RevealScope::Children,
        RevealOptions::rise(60.0).with_stagger(0.2),
    );

    // timeline items sit further down, each watched on its own
    let value_reveal = RevealOptions::rise(80.0).with_duration(1.0).with_threshold(0.85);

    html! {
        <section id="about" class="about-section">
            <div class="section-inner">
                <div class="about-grid">
                    <div ref={image_ref} class="about-image">
                        <div class="about-image-frame">
                            <img src="/assets/about-office.jpg" alt="Mtseku Transport Office and Team" />
                            <div class="about-image-tint"></div>
                        </div>
                        <div class="about-stat">
                            <div class="about-stat-number">{"100%"}</div>
                            <div class="about-stat-label">{"Trusted Service"}</div>
                        </div>
                    </div>

                    <div ref={content_ref} class="about-content">
                        <div>
                            <h2 class="about-title">{"About "}<span class="text-accent">{"Mtseku Transport"}</span></h2>
                            <p>
                                {"Founded on the principles of safety, reliability, and excellence, Mtseku Transport Services is dedicated to serving South Africa with premium transport solutions."}
                            </p>
                            <p>
                                {"From shuttle services to luxury tours, we pride ourselves on delivering personalized, professional transport experiences that exceed expectations across Cape Town and Johannesburg."}
                            </p>
                        </div>

                        <div class="about-pillars">
                            <div class="card">
                                <h3><span class="text-primary">{"👁 "}</span>{"Vision"}</h3>
                                <p>{"To be South Africa's most trusted and ethical transport partner."}</p>
                            </div>
                            <div class="card">
                                <h3><span class="text-accent">{"🎯 "}</span>{"Mission"}</h3>
                                <p>{"Deliver personalized, safe, and seamless transport services across South Africa."}</p>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="values">
                    <div class="section-header">
                        <h3>{"Our "}<span class="text-accent">{"Values"}</span></h3>
                        <p>{"Principles that guide every journey and shape the Mtseku experience."}</p>
                    </div>

                    <div class="values-timeline">
                        <div class="values-line"></div>
                        {
                            VALUES.iter().enumerate().map(|(index, (icon, title, description))| html! {
                                <RevealItem
                                    key={index}
                                    options={value_reveal.clone()}
                                    class={classes!("value-row", (index % 2 == 1).then(|| "reversed"))}
                                >
                                    <div class="value-card">
                                        <div class="value-heading">
                                            <div class="icon-badge">{*icon}</div>
                                            <h4>{*title}</h4>
                                        </div>
                                        <p>{*description}</p>
                                    </div>
                                    <div class="value-dot">{*icon}</div>
                                    <div class="value-spacer"></div>
                                </RevealItem>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .about-section {
                    padding: 5rem 0;
                    background: linear-gradient(to bottom, #fff, #eff6ff);
                    position: relative;
                }

                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                    margin-bottom: 8rem;
                }

                .about-image {
                    position: relative;
                }

                .about-image-frame {
                    position: relative;
                    overflow: hidden;
                    border-radius: 1rem;
                    box-shadow: var(--shadow-large);
                }

                .about-image-frame img {
                    display: block;
                    width: 100%;
                    height: 24rem;
                    object-fit: cover;
                }

                .about-image-tint {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top right, rgba(37, 99, 235, 0.2), rgba(249, 115, 22, 0.2));
                }

                .about-stat {
                    position: absolute;
                    bottom: -2rem;
                    right: -2rem;
                    background: #fff;
                    border-radius: 1rem;
                    padding: 1.5rem;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    text-align: center;
                }

                .about-stat-number {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: var(--primary);
                }

                .about-stat-label {
                    font-size: 0.875rem;
                    color: var(--muted);
                }

                .about-content {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .about-title {
                    font-family: var(--font-display);
                    font-size: clamp(2.25rem, 4vw, 3rem);
                    margin: 0 0 1.5rem;
                }

                .about-content p {
                    font-size: 1.125rem;
                    color: var(--muted);
                    line-height: 1.7;
                }

                .about-pillars {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }

                .about-pillars h3 {
                    font-size: 1.25rem;
                    margin: 0 0 1rem;
                }

                .about-pillars p {
                    font-size: 1rem;
                }

                .values-timeline {
                    position: relative;
                    max-width: 72rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 6rem;
                }

                .values-line {
                    position: absolute;
                    left: 50%;
                    top: 0;
                    bottom: 0;
                    width: 4px;
                    transform: translateX(-50%);
                    background: linear-gradient(to bottom, var(--primary), var(--accent));
                }

                .value-row {
                    position: relative;
                    display: flex;
                    align-items: flex-start;
                    gap: 2.5rem;
                }

                .value-row.reversed {
                    flex-direction: row-reverse;
                }

                .value-card {
                    width: 41.666%;
                    background: #fff;
                    border-radius: 1rem;
                    padding: 2rem;
                    border: 1px solid #f3f4f6;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }

                .value-heading {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }

                .value-heading h4 {
                    font-size: 1.25rem;
                    margin: 0;
                }

                .value-card p {
                    color: var(--muted);
                    margin: 0;
                }

                .value-dot {
                    z-index: 1;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(to bottom right, var(--primary), var(--accent));
                    color: #fff;
                }

                .value-spacer {
                    width: 41.666%;
                }

                @media (max-width: 1024px) {
                    .about-grid,
                    .about-pillars {
                        grid-template-columns: 1fr;
                    }

                    .value-row,
                    .value-row.reversed {
                        flex-direction: column;
                        align-items: center;
                    }

                    .value-card {
                        width: 100%;
                    }

                    .value-spacer {
                        display: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}
