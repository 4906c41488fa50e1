use chrono::{Local, NaiveDate};
use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, SubmitEvent};
use yew::prelude::*;

use crate::animation::options::RevealOptions;
use crate::animation::reveal::{use_reveal, RevealScope};
use crate::booking::model::{
    min_travel_date, passenger_label, parse_passengers, validate_travel_date, validate_travel_time,
    BookingError, ServiceType, MAX_PASSENGERS, MIN_PASSENGERS,
};
use crate::config;
use crate::links::{mailto_link, tel_link, whatsapp_link};

const BOOKING_FEATURES: [(&str, &str, &str); 4] = [
    ("✓", "Instant Confirmation", "Get booking confirmation within 30 minutes"),
    ("◷", "24/7 Availability", "Book anytime, we're always ready to serve"),
    ("🚐", "Premium Fleet", "Modern, well-maintained vehicles for your comfort"),
    ("👥", "Professional Drivers", "Experienced, courteous, and reliable drivers"),
];

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Clone)]
struct FormRefs {
    date: NodeRef,
    time: NodeRef,
    passengers: NodeRef,
    service: NodeRef,
}

impl FormRefs {
    /// Re-checks the fields the browser constrains, so a stale `min` after midnight
    /// or a tampered select never reaches the relay.
    fn validate(&self, today: NaiveDate) -> Result<(), BookingError> {
        let date = self.date.cast::<HtmlInputElement>().map(|i| i.value()).unwrap_or_default();
        validate_travel_date(&date, today)?;

        let time = self.time.cast::<HtmlInputElement>().map(|i| i.value()).unwrap_or_default();
        validate_travel_time(&time)?;

        if let Some(select) = self.passengers.cast::<HtmlSelectElement>() {
            parse_passengers(&select.value())?;
        }

        let service = self.service.cast::<HtmlSelectElement>().map(|s| s.value()).unwrap_or_default();
        ServiceType::from_label(&service)?;
        Ok(())
    }
}

#[function_component(Booking)]
pub fn booking() -> Html {
    let header_ref = use_node_ref();
    let form_ref = use_node_ref();
    let features_ref = use_node_ref();
    let error = use_state(|| None::<String>);

    let refs = FormRefs {
        date: use_node_ref(),
        time: use_node_ref(),
        passengers: use_node_ref(),
        service: use_node_ref(),
    };

    use_reveal(
        header_ref.clone(),
        RevealScope::Children,
        RevealOptions::rise(60.0).with_stagger(0.2),
    );
    use_reveal(
        form_ref.clone(),
        RevealScope::Element,
        RevealOptions::slide(-60.0).with_duration(1.0),
    );
    use_reveal(
        features_ref.clone(),
        RevealScope::Children,
        RevealOptions::slide(60.0).with_stagger(0.15),
    );

    let today = local_today();

    let onsubmit = {
        let error = error.clone();
        let refs = refs.clone();
        Callback::from(move |e: SubmitEvent| match refs.validate(local_today()) {
            Ok(()) => {
                info!("Submitting booking request to relay");
                error.set(None);
            }
            Err(err) => {
                warn!("Booking request blocked: {}", err);
                e.prevent_default();
                error.set(Some(err.to_string()));
            }
        })
    };

    html! {
        <section id="booking" class="booking-section">
            <div class="section-inner">
                <div ref={header_ref} class="section-header">
                    <h2>{"Book Your "}<span class="text-accent">{"Journey"}</span></h2>
                    <p>
                        {"Ready to travel with South Africa's premier transport service? Book your ride now and experience the comfort, safety, and reliability that sets us apart."}
                    </p>
                </div>

                <div class="booking-grid">
                    <div ref={form_ref} class="booking-card">
                        <div class="booking-card-header">
                            <h3>{"Book Your Transport"}</h3>
                            <span class="secure-badge">{"✓ Secure Booking"}</span>
                        </div>

                        <form action={config::booking_relay_url()} method="POST" class="booking-form" {onsubmit}>
                            <input type="hidden" name="_subject" value={config::BOOKING_SUBJECT} />
                            <input type="hidden" name="_captcha" value="false" />
                            <input type="hidden" name="_next" value={config::booking_redirect_url()} />

                            <div class="form-row">
                                <div class="form-field">
                                    <label for="name">{"Full Name *"}</label>
                                    <input type="text" id="name" name="name" required=true placeholder="Your full name" />
                                </div>
                                <div class="form-field">
                                    <label for="email">{"Email Address *"}</label>
                                    <input type="email" id="email" name="email" required=true placeholder="your@email.com" />
                                </div>
                            </div>

                            <div class="form-row">
                                <div class="form-field">
                                    <label for="phone">{"Phone Number *"}</label>
                                    <input type="tel" id="phone" name="phone" required=true placeholder="+27 123 456 789" />
                                </div>
                                <div class="form-field">
                                    <label for="passengers">{"Number of Passengers"}</label>
                                    <select id="passengers" name="passengers" ref={refs.passengers.clone()}>
                                        {
                                            (MIN_PASSENGERS..=MAX_PASSENGERS).map(|count| html! {
                                                <option key={count} value={count.to_string()}>{passenger_label(count)}</option>
                                            }).collect::<Html>()
                                        }
                                    </select>
                                </div>
                            </div>

                            <div class="form-row">
                                <div class="form-field">
                                    <label for="pickupLocation">{"Pickup Location *"}</label>
                                    <input type="text" id="pickupLocation" name="pickupLocation" required=true placeholder="Where should we pick you up?" />
                                </div>
                                <div class="form-field">
                                    <label for="destination">{"Destination *"}</label>
                                    <input type="text" id="destination" name="destination" required=true placeholder="Where are you going?" />
                                </div>
                            </div>

                            <div class="form-row three">
                                <div class="form-field">
                                    <label for="date">{"Travel Date *"}</label>
                                    <input type="date" id="date" name="date" required=true min={min_travel_date(today)} ref={refs.date.clone()} />
                                </div>
                                <div class="form-field">
                                    <label for="time">{"Preferred Time *"}</label>
                                    <input type="time" id="time" name="time" required=true ref={refs.time.clone()} />
                                </div>
                                <div class="form-field">
                                    <label for="serviceType">{"Service Type *"}</label>
                                    <select id="serviceType" name="serviceType" required=true ref={refs.service.clone()}>
                                        <option value="">{"Select service"}</option>
                                        {
                                            ServiceType::ALL.iter().map(|service| html! {
                                                <option value={service.label()}>{service.label()}</option>
                                            }).collect::<Html>()
                                        }
                                    </select>
                                </div>
                            </div>

                            <div class="form-field">
                                <label for="message">{"Additional Requirements"}</label>
                                <textarea id="message" name="message" rows="4" placeholder="Any special requirements, stops, or preferences..."></textarea>
                            </div>

                            {
                                if let Some(message) = (*error).as_ref() {
                                    html! { <p class="form-error">{message}</p> }
                                } else {
                                    html! {}
                                }
                            }

                            <div class="form-actions">
                                <button type="submit" class="btn-primary">{"✉ Send Booking Request"}</button>
                                <a href={whatsapp_link(None)} target="_blank" rel="noopener noreferrer" class="btn-outline dark">
                                    {"Quick WhatsApp Booking"}
                                </a>
                            </div>
                        </form>
                    </div>

                    <div ref={features_ref} class="booking-side">
                        <div class="booking-why">
                            <h4>{"Why Book With Us?"}</h4>
                            <p>{"Experience the difference with South Africa's premier transport service."}</p>
                            {
                                BOOKING_FEATURES.iter().map(|(icon, title, description)| html! {
                                    <div class="booking-feature">
                                        <span class="booking-feature-icon">{*icon}</span>
                                        <div>
                                            <h5>{*title}</h5>
                                            <p>{*description}</p>
                                        </div>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>

                        <div class="booking-contact">
                            <h4>{"Need Immediate Assistance?"}</h4>
                            <div class="booking-contact-row">
                                <p>{"Call us directly"}</p>
                                <a href={tel_link(config::PHONE_NUMBER)}>{config::PHONE_DISPLAY}</a>
                            </div>
                            <div class="booking-contact-row">
                                <p>{"Email us"}</p>
                                <a href={mailto_link(config::SUPPORT_EMAIL)}>{config::SUPPORT_EMAIL}</a>
                            </div>
                            <div class="booking-contact-row">
                                <p>{"WhatsApp"}</p>
                                <a href={whatsapp_link(None)} target="_blank" rel="noopener noreferrer" class="whatsapp-text">
                                    {"Start chat instantly"}
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .booking-section {
                    padding: 5rem 0;
                    background: var(--background);
                }

                .booking-grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 4rem;
                }

                .booking-card {
                    background: #fff;
                    border-radius: 1rem;
                    padding: 2rem;
                    box-shadow: var(--shadow-large);
                }

                .booking-card-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 2rem;
                }

                .booking-card-header h3 {
                    font-size: 1.5rem;
                    margin: 0;
                }

                .secure-badge {
                    font-size: 0.875rem;
                    color: var(--muted);
                }

                .booking-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }

                .form-row.three {
                    grid-template-columns: repeat(3, 1fr);
                }

                .form-field label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-bottom: 0.5rem;
                }

                .form-field input,
                .form-field select,
                .form-field textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    border: 1px solid var(--border);
                    border-radius: 0.5rem;
                    font: inherit;
                    transition: border-color 0.3s ease, box-shadow 0.3s ease;
                }

                .form-field textarea {
                    resize: none;
                }

                .form-field input:focus,
                .form-field select:focus,
                .form-field textarea:focus {
                    outline: none;
                    border-color: transparent;
                    box-shadow: 0 0 0 2px var(--primary);
                }

                .form-error {
                    color: #dc2626;
                    font-size: 0.875rem;
                    margin: 0;
                }

                .form-actions {
                    display: flex;
                    gap: 1rem;
                }

                .form-actions > * {
                    flex: 1;
                    text-align: center;
                }

                .booking-side {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .booking-why {
                    background: linear-gradient(to right, var(--primary), var(--accent));
                    border-radius: 1rem;
                    padding: 1.5rem;
                    color: #fff;
                }

                .booking-why h4 {
                    font-size: 1.25rem;
                    margin: 0 0 1rem;
                }

                .booking-why > p {
                    color: rgba(255, 255, 255, 0.9);
                    margin-bottom: 1.5rem;
                }

                .booking-feature {
                    display: flex;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                }

                .booking-feature h5 {
                    margin: 0;
                    font-size: 1rem;
                }

                .booking-feature p {
                    margin: 0;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.8);
                }

                .booking-contact {
                    background: #fff;
                    border-radius: 1rem;
                    padding: 1.5rem;
                    box-shadow: var(--shadow-soft);
                    border: 1px solid var(--border);
                }

                .booking-contact h4 {
                    margin: 0 0 1rem;
                }

                .booking-contact-row {
                    margin-bottom: 1rem;
                }

                .booking-contact-row p {
                    font-weight: 500;
                    margin: 0;
                }

                .booking-contact-row a {
                    color: var(--primary);
                    text-decoration: none;
                }

                .booking-contact-row a.whatsapp-text {
                    color: #16a34a;
                }

                @media (max-width: 1024px) {
                    .booking-grid {
                        grid-template-columns: 1fr;
                    }
                }

                @media (max-width: 768px) {
                    .form-row,
                    .form-row.three {
                        grid-template-columns: 1fr;
                    }

                    .form-actions {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </section>
    }
}
