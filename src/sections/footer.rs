use chrono::{Datelike, Local};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::booking::model::ServiceType;
use crate::config;
use crate::links::{mailto_link, tel_link, whatsapp_link};
use crate::navigation::{scroll_to_section, Section};
use crate::Route;

const QUICK_LINKS: [(&str, Section); 5] = [
    ("Home", Section::Home),
    ("About Us", Section::About),
    ("Services", Section::Services),
    ("Our Drivers", Section::Drivers),
    ("Contact", Section::Contact),
];

const FOOTER_SERVICES: [ServiceType; 4] = [
    ServiceType::Shuttle,
    ServiceType::Tours,
    ServiceType::PrivateHire,
    ServiceType::ContractTransport,
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="section-inner">
                <div class="footer-grid">
                    <div class="footer-about">
                        <h3>{"Mtseku Transport"}</h3>
                        <p>
                            {"Professional transport services across Cape Town and Johannesburg. Safe, reliable, and premium solutions for all your travel needs."}
                        </p>
                        <div class="footer-socials">
                            <a href={whatsapp_link(None)} target="_blank" rel="noopener noreferrer" aria-label="WhatsApp">{"💬"}</a>
                            <a href={tel_link(config::PHONE_NUMBER)} aria-label="Call">{"📞"}</a>
                            <a href={mailto_link(config::SUPPORT_EMAIL)} aria-label="Email">{"✉"}</a>
                        </div>
                    </div>

                    <div>
                        <h4>{"Quick Links"}</h4>
                        <ul>
                            {
                                QUICK_LINKS.iter().map(|(label, section)| {
                                    let section = *section;
                                    let onclick = Callback::from(move |_: MouseEvent| scroll_to_section(section));
                                    html! {
                                        <li><button class="footer-link" {onclick}>{*label}</button></li>
                                    }
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>

                    <div>
                        <h4>{"Our Services"}</h4>
                        <ul>
                            { for FOOTER_SERVICES.iter().map(|service| html! { <li>{service.label()}</li> }) }
                        </ul>
                    </div>

                    <div>
                        <h4>{"Contact Info"}</h4>
                        <div class="footer-contact">
                            <div>
                                <p>{"7 Laddier Street, The Rides"}</p>
                                <p>{"Centurion, Gauteng, 0061"}</p>
                                <p>{"South Africa"}</p>
                            </div>
                            <a href={tel_link(config::PHONE_NUMBER)}>{config::PHONE_DISPLAY}</a>
                            <a href={mailto_link(config::SUPPORT_EMAIL)}>{config::SUPPORT_EMAIL}</a>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <div>{format!("© {} {} (Pty) Ltd. All rights reserved.", year, config::COMPANY_NAME)}</div>
                    <div class="footer-legal">
                        <span>{"Built with excellence for South African transport"}</span>
                        <Link<Route> to={Route::Privacy}>{"Privacy"}</Link<Route>>
                        <Link<Route> to={Route::CookieNotice}>{"Cookie Notice"}</Link<Route>>
                        <Link<Route> to={Route::Terms}>{"Terms of Use"}</Link<Route>>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: var(--primary);
                    color: #fff;
                }

                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    padding: 4rem 0;
                }

                .footer-about h3 {
                    font-family: var(--font-display);
                    font-size: 1.5rem;
                    margin: 0 0 1rem;
                }

                .site-footer p,
                .site-footer li {
                    color: rgba(255, 255, 255, 0.8);
                }

                .site-footer h4 {
                    font-size: 1.125rem;
                    margin: 0 0 1.5rem;
                }

                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .footer-socials {
                    display: flex;
                    gap: 1rem;
                    margin-top: 1.5rem;
                }

                .footer-socials a {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(255, 255, 255, 0.1);
                    text-decoration: none;
                    transition: background 0.3s ease;
                }

                .footer-socials a:hover {
                    background: var(--accent);
                }

                .footer-link {
                    background: none;
                    border: none;
                    padding: 0;
                    font: inherit;
                    color: rgba(255, 255, 255, 0.8);
                    cursor: pointer;
                    transition: color 0.3s ease;
                }

                .footer-link:hover,
                .footer-contact a:hover,
                .footer-legal a:hover {
                    color: var(--accent);
                }

                .footer-contact {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    font-size: 0.875rem;
                }

                .footer-contact p {
                    margin: 0;
                }

                .footer-contact a {
                    color: rgba(255, 255, 255, 0.8);
                    text-decoration: none;
                }

                .footer-bottom {
                    border-top: 1px solid rgba(255, 255, 255, 0.2);
                    padding: 2rem 0;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.6);
                }

                .footer-legal {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                }

                .footer-legal a {
                    color: rgba(255, 255, 255, 0.6);
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                @media (max-width: 1024px) {
                    .footer-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }

                    .footer-bottom {
                        flex-direction: column;
                        text-align: center;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
