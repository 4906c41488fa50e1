use yew::prelude::*;

use crate::animation::options::RevealOptions;
use crate::animation::reveal::{use_reveal, RevealScope};

const REASONS: [(&str, &str, &str); 6] = [
    ("🛡", "Safety First Approach", "Comprehensive safety protocols, regular vehicle maintenance, and experienced drivers ensure your journey is secure."),
    ("◷", "Punctual & Reliable", "Our commitment to timeliness means you can depend on us for consistent, on-time service every single time."),
    ("🏆", "Premium Quality Service", "From vehicle condition to customer service, we maintain the highest standards in every aspect of our operation."),
    ("👥", "Professional Team", "Our experienced drivers and support staff are trained to provide courteous, professional service."),
    ("📍", "Local Expertise", "Deep knowledge of Cape Town and Johannesburg routes ensures efficient navigation and local insights."),
    ("🎧", "24/7 Customer Support", "Round-the-clock assistance for bookings, inquiries, and emergency support whenever you need us."),
];

struct Stat {
    icon: &'static str,
    number: &'static str,
    label: &'static str,
    description: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { icon: "📈", number: "10,000+", label: "Satisfied Customers", description: "Happy clients who trust our services" },
    Stat { icon: "✓", number: "99.9%", label: "On-Time Performance", description: "Exceptional punctuality record" },
    Stat { icon: "🛡", number: "Zero", label: "Major Incidents", description: "Impeccable safety record" },
    Stat { icon: "🏆", number: "100%", label: "Quality Commitment", description: "Dedicated to transport excellence" },
];

#[function_component(WhyUs)]
pub fn why_us() -> Html {
    let header_ref = use_node_ref();
    let reasons_ref = use_node_ref();
    let stats_ref = use_node_ref();

    use_reveal(
        header_ref.clone(),
        RevealScope::Children,
        RevealOptions::rise(60.0).with_stagger(0.2),
    );
    use_reveal(
        reasons_ref.clone(),
        RevealScope::Children,
        RevealOptions::slide(-60.0).with_stagger(0.1),
    );
    use_reveal(
        stats_ref.clone(),
        RevealScope::Children,
        RevealOptions::pop(0.8).with_stagger(0.15),
    );

    html! {
        <section id="why-us" class="why-section">
            <div class="section-inner">
                <div ref={header_ref} class="section-header">
                    <h2>{"Why Choose "}<span class="text-accent">{"Mtseku Transport"}</span></h2>
                    <p>
                        {"We've built our reputation on delivering exceptional service that goes beyond just getting you from A to B, focusing on safety, reliability, and customer satisfaction in every journey."}
                    </p>
                </div>

                <div ref={reasons_ref} class="reasons-grid">
                    {
                        REASONS.iter().map(|(icon, title, description)| html! {
                            <div class="card reason-card">
                                <div class="icon-badge large">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div class="track-record">
                    <div class="track-record-header">
                        <h3>{"Our Track Record Speaks"}</h3>
                        <p>{"Numbers that demonstrate our commitment to excellence and customer satisfaction."}</p>
                    </div>
                    <div ref={stats_ref} class="stats-grid">
                        {
                            STATS.iter().map(|stat| html! {
                                <div class="stat">
                                    <div class="stat-icon">{stat.icon}</div>
                                    <div class="stat-number">{stat.number}</div>
                                    <div class="stat-label">{stat.label}</div>
                                    <div class="stat-description">{stat.description}</div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .why-section {
                    padding: 5rem 0;
                    background: rgba(241, 245, 249, 0.3);
                }

                .reasons-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    margin-bottom: 5rem;
                }

                .reason-card {
                    padding: 2rem;
                    transition: box-shadow 0.5s ease;
                }

                .reason-card:hover {
                    box-shadow: var(--shadow-large);
                }

                .reason-card h3 {
                    font-size: 1.25rem;
                    margin: 1.5rem 0 1rem;
                }

                .reason-card p {
                    color: var(--muted);
                    line-height: 1.7;
                    margin: 0;
                }

                .track-record {
                    border-radius: 1.5rem;
                    padding: 3rem;
                    color: #fff;
                    background: linear-gradient(to right, var(--primary), var(--accent));
                }

                .track-record-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .track-record-header h3 {
                    font-family: var(--font-display);
                    font-size: clamp(1.875rem, 3vw, 2.25rem);
                    margin: 0 0 1rem;
                }

                .track-record-header p {
                    color: rgba(255, 255, 255, 0.9);
                    font-size: 1.125rem;
                    max-width: 42rem;
                    margin: 0 auto;
                }

                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }

                .stat {
                    text-align: center;
                }

                .stat-icon {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    border-radius: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                    background: rgba(255, 255, 255, 0.2);
                    transition: transform 0.3s ease;
                }

                .stat:hover .stat-icon {
                    transform: scale(1.1);
                }

                .stat-number {
                    font-size: clamp(2.25rem, 4vw, 3rem);
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }

                .stat-label {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }

                .stat-description {
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.8);
                }

                @media (max-width: 1024px) {
                    .reasons-grid,
                    .stats-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .reasons-grid,
                    .stats-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
