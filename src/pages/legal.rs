use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::links::{mailto_link, whatsapp_link};
use crate::Route;

const EFFECTIVE_DATE: &str = "September 2025";

enum Block {
    Text(&'static str),
    List(&'static [&'static str]),
}

struct Clause {
    heading: &'static str,
    body: Block,
}

const PRIVACY: [Clause; 3] = [
    Clause {
        heading: "Information We Collect",
        body: Block::List(&[
            "Name, email, phone number (when you contact us or book)",
            "Pickup & drop-off details (to provide transport services)",
            "Payment details (securely handled by third-party providers)",
            "Website usage data (cookies, analytics)",
        ]),
    },
    Clause {
        heading: "How We Use Your Information",
        body: Block::List(&[
            "To manage shuttle & tour services",
            "To respond to your inquiries or bookings",
            "To improve our services & website",
            "To comply with legal obligations",
        ]),
    },
    Clause {
        heading: "Your Rights",
        body: Block::Text(
            "You may request access to your data, ask us to correct or delete it, or opt-out of marketing communications.",
        ),
    },
];

const COOKIES: [Clause; 3] = [
    Clause {
        heading: "What Are Cookies?",
        body: Block::Text("Cookies are small files stored on your device when you visit our site."),
    },
    Clause {
        heading: "Types of Cookies We Use",
        body: Block::List(&[
            "Essential Cookies: core functionality (navigation, forms)",
            "Performance Cookies: site traffic analytics (Google Analytics)",
            "Functionality Cookies: remember preferences (language, region)",
        ]),
    },
    Clause {
        heading: "Managing Cookies",
        body: Block::Text(
            "You can accept, reject, or delete cookies via your browser settings. Note: Disabling cookies may affect site functionality.",
        ),
    },
];

const TERMS: [Clause; 5] = [
    Clause {
        heading: "Services",
        body: Block::Text(
            "We provide shuttle, tour, private hire, and contract transport solutions in South Africa.",
        ),
    },
    Clause {
        heading: "User Responsibilities",
        body: Block::List(&[
            "Provide accurate booking information",
            "Use services for lawful purposes only",
            "Respect the rights and safety of drivers and passengers",
        ]),
    },
    Clause {
        heading: "Limitations of Liability",
        body: Block::Text(
            "We are not responsible for delays caused by traffic, weather, or events beyond our control. All services are covered by passenger liability insurance.",
        ),
    },
    Clause {
        heading: "Intellectual Property",
        body: Block::Text(
            "All website content (logo, text, images) belongs to Mtseku Transport Services and may not be copied without permission.",
        ),
    },
    Clause {
        heading: "Governing Law",
        body: Block::Text("These terms are governed by the laws of South Africa."),
    },
];

#[derive(Properties, PartialEq)]
struct LegalPageProps {
    title: AttrValue,
    #[prop_or(true)]
    show_contact: bool,
    children: Children,
}

#[function_component(LegalPage)]
fn legal_page(props: &LegalPageProps) -> Html {
    html! {
        <div class="legal-page">
            <div class="legal-back">
                <Link<Route> to={Route::Home}>{"← Back to Home"}</Link<Route>>
            </div>

            <h1 class="legal-title">{props.title.clone()}</h1>
            <p class="legal-date">{format!("Effective Date: {}", EFFECTIVE_DATE)}</p>

            <div class="legal-card">
                { props.children.clone() }
                {
                    if props.show_contact {
                        html! {
                            <div class="legal-contact">
                                {"📧 Contact us: "}
                                <a href={mailto_link(config::SUPPORT_EMAIL)}>{config::SUPPORT_EMAIL}</a>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            <style>
                {r#"
                .legal-page {
                    min-height: 100vh;
                    padding: 4rem 1.5rem;
                    background: var(--primary);
                    color: #fff;
                }

                .legal-back,
                .legal-card {
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .legal-back {
                    margin-bottom: 2rem;
                }

                .legal-back a,
                .legal-contact a {
                    color: var(--accent);
                    font-size: 0.875rem;
                    text-decoration: none;
                }

                .legal-back a:hover,
                .legal-contact a:hover {
                    text-decoration: underline;
                }

                .legal-title {
                    text-align: center;
                    font-size: 2.25rem;
                    color: var(--accent);
                    margin: 0 0 1.5rem;
                    animation: legalDrop 0.6s ease both;
                }

                .legal-date {
                    text-align: center;
                    color: rgba(255, 255, 255, 0.7);
                    margin-bottom: 3rem;
                    animation: legalFade 0.6s ease 0.3s both;
                }

                .legal-card {
                    padding: 2rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(16px);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    animation: legalRise 0.6s ease 0.4s both;
                }

                .legal-card section + section {
                    margin-top: 2rem;
                }

                .legal-card h2 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin: 0 0 1rem;
                }

                .legal-card p,
                .legal-card li {
                    color: rgba(255, 255, 255, 0.8);
                }

                .legal-card ul {
                    margin: 0 0 0 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .legal-contact {
                    margin-top: 2rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.2);
                    color: rgba(255, 255, 255, 0.7);
                }

                @keyframes legalDrop {
                    from { opacity: 0; transform: translateY(-30px); }
                }

                @keyframes legalFade {
                    from { opacity: 0; }
                }

                @keyframes legalRise {
                    from { opacity: 0; transform: translateY(50px); }
                }
                "#}
            </style>
        </div>
    }
}

fn render_clauses(clauses: &[Clause]) -> Html {
    clauses
        .iter()
        .map(|clause| {
            let body = match &clause.body {
                Block::Text(text) => html! { <p>{*text}</p> },
                Block::List(items) => html! {
                    <ul>{ for items.iter().map(|item| html! { <li>{*item}</li> }) }</ul>
                },
            };
            html! {
                <section>
                    <h2>{clause.heading}</h2>
                    {body}
                </section>
            }
        })
        .collect()
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalPage title="Privacy Policy">
            { render_clauses(&PRIVACY) }
        </LegalPage>
    }
}

#[function_component(CookieNotice)]
pub fn cookie_notice() -> Html {
    html! {
        <LegalPage title="Cookie Notice" show_contact={false}>
            { render_clauses(&COOKIES) }
        </LegalPage>
    }
}

#[function_component(TermsOfUse)]
pub fn terms_of_use() -> Html {
    html! {
        <LegalPage title="Terms of Use">
            { render_clauses(&TERMS) }
        </LegalPage>
    }
}

/// Landing page for the booking relay's redirect.
#[function_component(ThankYou)]
pub fn thank_you() -> Html {
    html! {
        <div class="thanks-page">
            <div class="thanks-card">
                <div class="thanks-check">{"✓"}</div>
                <h1>{"Booking Request Received"}</h1>
                <p>
                    {"Thank you for choosing Mtseku Transport. We'll confirm your booking within 30 minutes."}
                </p>
                <div class="thanks-actions">
                    <Link<Route> to={Route::Home} classes="btn-primary">{"Back to Home"}</Link<Route>>
                    <a href={whatsapp_link(None)} target="_blank" rel="noopener noreferrer" class="btn-outline dark">
                        {"Chat on WhatsApp"}
                    </a>
                </div>
            </div>

            <style>
                {r#"
                .thanks-page {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 2rem;
                    background: linear-gradient(to bottom right, #eff6ff, #fff7ed);
                }

                .thanks-card {
                    max-width: 32rem;
                    text-align: center;
                    background: #fff;
                    border-radius: 1.5rem;
                    padding: 3rem 2rem;
                    box-shadow: var(--shadow-large);
                }

                .thanks-check {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1.5rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                    color: #fff;
                    background: #22c55e;
                }

                .thanks-card h1 {
                    font-family: var(--font-display);
                    margin: 0 0 1rem;
                }

                .thanks-card p {
                    color: var(--muted);
                    margin-bottom: 2rem;
                }

                .thanks-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headings(clauses: &[Clause]) -> Vec<&'static str> {
        clauses.iter().map(|c| c.heading).collect()
    }

    #[test]
    fn privacy_covers_collection_use_and_rights() {
        assert_eq!(
            headings(&PRIVACY),
            ["Information We Collect", "How We Use Your Information", "Your Rights"]
        );
    }

    #[test]
    fn terms_end_with_governing_law() {
        assert_eq!(TERMS.last().map(|c| c.heading), Some("Governing Law"));
    }

    #[test]
    fn cookie_types_are_listed() {
        match &COOKIES[1].body {
            Block::List(items) => assert_eq!(items.len(), 3),
            Block::Text(_) => panic!("cookie types should be a list"),
        }
    }
}
