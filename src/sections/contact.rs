use web_sys::MouseEvent;
use yew::prelude::*;

use crate::animation::options::RevealOptions;
use crate::animation::reveal::{use_reveal, RevealScope};
use crate::config;
use crate::links::{mailto_link, maps_link, tel_link, whatsapp_link};

const OFFICE_ADDRESS: &str = "11 Bottlebrush St, Ferndale, Randburg, 2194, South Africa";

const FAQS: [(&str, &str); 4] = [
    (
        "How do I make a booking?",
        "You can book directly through our booking form, via WhatsApp, or by calling us. We'll confirm your booking within 30 minutes.",
    ),
    (
        "Are your vehicles insured?",
        "Yes, all our vehicles are fully insured, including passenger liability, for maximum safety.",
    ),
    (
        "Do you offer airport transfers?",
        "Absolutely! We provide reliable airport shuttle services in both Cape Town and Johannesburg.",
    ),
    (
        "Can I request a custom transport solution?",
        "Yes, we offer tailored transport solutions for individuals, groups, and corporate clients.",
    ),
];

const PROMISES: [&str; 4] = [
    "Response within 30 minutes",
    "Professional, courteous service",
    "Competitive, transparent pricing",
    "Safe, reliable transport solutions",
];

struct ContactCard {
    icon: &'static str,
    title: &'static str,
    details: Vec<&'static str>,
    action: &'static str,
    href: String,
}

fn contact_cards() -> Vec<ContactCard> {
    vec![
        ContactCard {
            icon: "📍",
            title: "Visit Our Office",
            details: vec!["11 Bottlebrush St, Ferndale", "Randburg, Gauteng, 2194", "South Africa"],
            action: "Get Directions",
            href: maps_link(OFFICE_ADDRESS),
        },
        ContactCard {
            icon: "📞",
            title: "Call Us Directly",
            details: vec![config::PHONE_DISPLAY, "Available 24/7"],
            action: "Call Now",
            href: tel_link(config::PHONE_NUMBER),
        },
        ContactCard {
            icon: "✉",
            title: "Email Support",
            details: vec![config::SUPPORT_EMAIL, "Quotes & Bookings"],
            action: "Send Email",
            href: mailto_link(config::SUPPORT_EMAIL),
        },
        ContactCard {
            icon: "💬",
            title: "WhatsApp Chat",
            details: vec!["Instant Messaging", "Quick Quotes"],
            action: "Start Chat",
            href: whatsapp_link(None),
        },
    ]
}

/// At most one answer is open; selecting the open one closes it.
pub fn toggle_faq(open: Option<usize>, index: usize) -> Option<usize> {
    if open == Some(index) {
        None
    } else {
        Some(index)
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let header_ref = use_node_ref();
    let info_ref = use_node_ref();
    let faq_ref = use_node_ref();
    let open_faq = use_state(|| None::<usize>);

    use_reveal(
        header_ref.clone(),
        RevealScope::Children,
        RevealOptions::rise(60.0).with_stagger(0.2),
    );
    use_reveal(
        info_ref.clone(),
        RevealScope::Children,
        RevealOptions::slide(60.0).with_stagger(0.15),
    );
    use_reveal(
        faq_ref.clone(),
        RevealScope::Element,
        RevealOptions::rise(80.0).with_duration(1.0),
    );

    html! {
        <section id="contact" class="contact-section">
            <div class="section-inner">
                <div ref={header_ref} class="section-header">
                    <h2>{"Get In "}<span class="text-accent">{"Touch"}</span></h2>
                    <p>{"Ready to book your journey or need more information? We're here to help 24/7."}</p>
                </div>

                <div ref={info_ref} class="contact-grid">
                    {
                        contact_cards().into_iter().map(|card| html! {
                            <div class="card contact-card">
                                <div class="icon-badge">{card.icon}</div>
                                <div class="contact-card-body">
                                    <h4>{card.title}</h4>
                                    { for card.details.iter().map(|detail| html! { <p>{*detail}</p> }) }
                                    <a href={card.href} target="_blank" rel="noopener noreferrer">
                                        {format!("{} →", card.action)}
                                    </a>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div class="promise">
                    <h4>{"✓ Our Promise"}</h4>
                    <div class="promise-grid">
                        {
                            PROMISES.iter().map(|point| html! {
                                <div class="promise-point">
                                    <span class="promise-check">{"✓"}</span>
                                    <span>{*point}</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div ref={faq_ref} class="faq">
                    <h3>{"Frequently Asked Questions"}</h3>
                    {
                        FAQS.iter().enumerate().map(|(index, (question, answer))| {
                            let is_open = *open_faq == Some(index);
                            let toggle = {
                                let open_faq = open_faq.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    open_faq.set(toggle_faq(*open_faq, index));
                                })
                            };
                            html! {
                                <div key={index} class={classes!("faq-item", is_open.then(|| "open"))}>
                                    <button class="faq-question" onclick={toggle}>
                                        <span>{*question}</span>
                                        <span class="faq-chevron">{"⌄"}</span>
                                    </button>
                                    {
                                        if is_open {
                                            html! { <div class="faq-answer">{*answer}</div> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .contact-section {
                    padding: 5rem 0;
                    background: linear-gradient(to bottom, #fff, #eff6ff);
                }

                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    margin-bottom: 4rem;
                }

                .contact-card {
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                    transition: box-shadow 0.5s ease;
                }

                .contact-card:hover {
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }

                .contact-card-body h4 {
                    font-size: 1.125rem;
                    margin: 0 0 0.5rem;
                }

                .contact-card-body p {
                    font-size: 0.875rem;
                    color: var(--muted);
                    margin: 0 0 0.25rem;
                }

                .contact-card-body a {
                    display: inline-block;
                    margin-top: 0.75rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: var(--primary);
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .contact-card-body a:hover {
                    color: var(--accent);
                }

                .promise {
                    border-radius: 1rem;
                    padding: 2rem;
                    margin-bottom: 5rem;
                    color: #fff;
                    background: linear-gradient(to right, var(--primary), var(--accent));
                }

                .promise h4 {
                    font-size: 1.25rem;
                    margin: 0 0 1.5rem;
                }

                .promise-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }

                .promise-point {
                    display: flex;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.9);
                }

                .promise-check {
                    color: #86efac;
                }

                .faq {
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .faq h3 {
                    text-align: center;
                    font-size: 1.875rem;
                    margin-bottom: 2.5rem;
                }

                .faq-item {
                    border: 1px solid #e5e7eb;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    margin-bottom: 1rem;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem 1.5rem;
                    background: none;
                    border: none;
                    font: inherit;
                    font-weight: 500;
                    text-align: left;
                    color: #1f2937;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                .faq-question:hover {
                    background: #f9fafb;
                }

                .faq-chevron {
                    transition: transform 0.3s ease;
                }

                .faq-item.open .faq-chevron {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    padding: 0 1.5rem 1rem;
                    font-size: 0.875rem;
                    color: var(--muted);
                }

                @media (max-width: 768px) {
                    .contact-grid,
                    .promise-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_answer_closes_the_other() {
        assert_eq!(toggle_faq(None, 2), Some(2));
        assert_eq!(toggle_faq(Some(2), 0), Some(0));
    }

    #[test]
    fn selecting_open_answer_closes_it() {
        assert_eq!(toggle_faq(Some(1), 1), None);
    }

    #[test]
    fn every_card_links_somewhere() {
        let cards = contact_cards();
        assert_eq!(cards.len(), 4);
        assert!(cards[0].href.starts_with("https://maps.google.com/?q=11%20Bottlebrush"));
        assert_eq!(cards[1].href, "tel:+27788686706");
        assert_eq!(cards[2].href, "mailto:Tony.Noyila@outlook.com");
        assert_eq!(cards[3].href, "https://wa.me/27788686706");
    }
}
