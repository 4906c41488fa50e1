use yew::prelude::*;

use crate::animation::options::{Easing, RevealOptions};
use crate::animation::reveal::{use_reveal, RevealScope};

const QUALITIES: [(&str, &str, &str); 6] = [
    ("🛡", "Licensed & Insured", "Drivers hold valid professional permits and full insurance."),
    ("◷", "Punctual Always", "Committed to reliable, on-time service on every trip."),
    ("📍", "Local Knowledge", "Expert knowledge of Cape Town & Johannesburg routes."),
    ("👥", "Customer-Centered", "Trained in hospitality for a smooth, enjoyable ride."),
    ("♥", "Passenger Care", "Focused on your comfort, safety, and satisfaction."),
    ("★", "Top Rated", "Consistently reviewed with 5-star ratings by clients."),
];

const TRUST_BADGES: [(&str, &str); 3] = [
    ("🏆", "Certified Excellence"),
    ("✓", "Verified Drivers"),
    ("🛡", "Unmatched Safety"),
];

#[function_component(Drivers)]
pub fn drivers() -> Html {
    let content_ref = use_node_ref();
    let qualities_ref = use_node_ref();
    let badges_ref = use_node_ref();

    use_reveal(
        content_ref.clone(),
        RevealScope::Element,
        RevealOptions::slide(80.0).with_duration(1.0),
    );
    use_reveal(
        qualities_ref.clone(),
        RevealScope::Children,
        RevealOptions::rise(40.0).with_stagger(0.15).with_threshold(0.85),
    );
    use_reveal(
        badges_ref.clone(),
        RevealScope::Children,
        RevealOptions::pop(0.7)
            .with_duration(0.9)
            .with_stagger(0.2)
            .with_easing(Easing::BackOut)
            .with_threshold(0.85),
    );

    html! {
        <section id="drivers" class="drivers-section">
            <div class="wave wave-top">
                <svg preserveAspectRatio="none" viewBox="0 0 500 150">
                    <path d="M0.00,49.98 C150.00,150.00 350.00,-50.00 500.00,49.98 L500.00,0 L0.00,0 Z"></path>
                </svg>
            </div>

            <div class="section-inner drivers-inner">
                <div class="section-header">
                    <h2>{"Meet Our "}<span class="text-accent">{"Professional Drivers"}</span></h2>
                    <p>
                        {"The face of Mtseku Transport: experts behind the wheel who combine safety, punctuality, and customer care in every journey."}
                    </p>
                </div>

                <div class="drivers-grid">
                    <div class="drivers-image">
                        <div class="drivers-image-frame">
                            <img src="/assets/professional-drivers.jpg" alt="Drivers" />
                            <div class="drivers-image-tint"></div>
                        </div>
                        <div class="drivers-badge">
                            <span class="text-accent">{"🏆"}</span>
                            <span>{"Certified & Trusted"}</span>
                        </div>
                    </div>

                    <div ref={content_ref}>
                        <h3 class="drivers-heading">{"Excellence in Every Mile"}</h3>
                        <p class="drivers-lead">
                            {"More than just drivers, they are safety ambassadors and travel partners, ensuring each ride reflects our values of professionalism and trust."}
                        </p>
                        <div ref={qualities_ref} class="qualities-grid">
                            {
                                QUALITIES.iter().map(|(icon, title, description)| html! {
                                    <div class="quality-card">
                                        <div class="quality-heading">
                                            <div class="icon-badge small">{*icon}</div>
                                            <h4>{*title}</h4>
                                        </div>
                                        <p>{*description}</p>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </div>

                <div ref={badges_ref} class="trust-badges">
                    {
                        TRUST_BADGES.iter().map(|(icon, label)| html! {
                            <div class="trust-badge">
                                <div class="trust-badge-icon">{*icon}</div>
                                <span>{*label}</span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <div class="wave wave-bottom">
                <svg preserveAspectRatio="none" viewBox="0 0 500 150">
                    <path d="M0.00,49.98 C150.00,150.00 350.00,-50.00 500.00,49.98 L500.00,150.00 L0.00,150.00 Z"></path>
                </svg>
            </div>

            <style>
                {r#"
                .drivers-section {
                    position: relative;
                    padding: 6rem 0;
                    overflow: hidden;
                    background: linear-gradient(to bottom, #fff, #eff6ff, #fff7ed);
                }

                .wave {
                    position: absolute;
                    left: 0;
                    width: 100%;
                    line-height: 0;
                    overflow: hidden;
                }

                .wave svg {
                    width: 100%;
                    height: 6rem;
                }

                .wave-top {
                    top: 0;
                    transform: rotate(180deg);
                }

                .wave-top path {
                    fill: rgba(37, 99, 235, 0.1);
                }

                .wave-bottom {
                    bottom: 0;
                }

                .wave-bottom path {
                    fill: rgba(249, 115, 22, 0.2);
                }

                .drivers-inner {
                    position: relative;
                    z-index: 1;
                }

                .drivers-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                    margin-bottom: 5rem;
                }

                .drivers-image {
                    position: relative;
                }

                .drivers-image-frame {
                    position: relative;
                    overflow: hidden;
                    border-radius: 1.5rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }

                .drivers-image-frame img {
                    display: block;
                    width: 100%;
                    height: 500px;
                    object-fit: cover;
                }

                .drivers-image-tint {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top right, rgba(37, 99, 235, 0.3), rgba(249, 115, 22, 0.3));
                }

                .drivers-badge {
                    position: absolute;
                    bottom: 2rem;
                    left: 2rem;
                    display: flex;
                    gap: 0.75rem;
                    align-items: center;
                    background: #fff;
                    border-radius: 1rem;
                    padding: 1.25rem;
                    font-weight: 600;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }

                .drivers-heading {
                    font-size: 1.875rem;
                    margin: 0 0 1.5rem;
                }

                .drivers-lead {
                    font-size: 1.125rem;
                    color: var(--muted);
                    margin-bottom: 2rem;
                }

                .qualities-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }

                .quality-card {
                    background: #fff;
                    border-radius: 0.75rem;
                    padding: 1.25rem;
                    border: 1px solid #f3f4f6;
                    box-shadow: var(--shadow-soft);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .quality-card:hover {
                    transform: translateY(-0.5rem);
                    box-shadow: var(--shadow-large);
                }

                .quality-heading {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 0.75rem;
                }

                .quality-heading h4 {
                    margin: 0;
                }

                .quality-card p {
                    font-size: 0.875rem;
                    color: var(--muted);
                    margin: 0;
                }

                .trust-badges {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 2.5rem;
                    margin-top: 3rem;
                }

                .trust-badge {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    font-weight: 500;
                }

                .trust-badge-icon {
                    width: 5rem;
                    height: 5rem;
                    margin-bottom: 1rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                    color: #fff;
                    background: linear-gradient(to bottom right, var(--primary), var(--accent));
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    animation: badgePulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                }

                @keyframes badgePulse {
                    50% { opacity: 0.5; }
                }

                @media (max-width: 1024px) {
                    .drivers-grid {
                        grid-template-columns: 1fr;
                    }
                }

                @media (max-width: 640px) {
                    .qualities-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
