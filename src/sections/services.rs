use yew::prelude::*;

use crate::animation::options::RevealOptions;
use crate::animation::reveal::{use_reveal, RevealScope};
use crate::links::whatsapp_link;

struct ServiceCard {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    image: &'static str,
    features: [&'static str; 4],
}

const SERVICES: [ServiceCard; 4] = [
    ServiceCard {
        icon: "🚌",
        title: "Shuttle Services",
        description: "Reliable daily shuttles for corporate clients, schools, and regular commutes. Comfortable, punctual, and professional.",
        image: "/assets/service1.jpg",
        features: ["Corporate Shuttles", "School Transport", "Airport Transfers", "Regular Routes"],
    },
    ServiceCard {
        icon: "📍",
        title: "Tours & Sightseeing",
        description: "Discover South Africa's beauty with our guided tours. From wine estates to cultural landmarks, we make every journey memorable.",
        image: "/assets/service2.jpg",
        features: ["Wine Tours", "Garden Route", "Cultural Experiences", "Custom Itineraries"],
    },
    ServiceCard {
        icon: "🚘",
        title: "Private Hire",
        description: "Premium private vehicle hire for special occasions, business meetings, and personal travel. Luxury meets convenience.",
        image: "/assets/service3.jpg",
        features: ["Executive Travel", "Event Transport", "VIP Service", "Flexible Booking"],
    },
    ServiceCard {
        icon: "💼",
        title: "Contract Transport",
        description: "Reliable, long-term transport solutions for businesses and individuals who need regular, dedicated vehicles. We provide well-maintained cars with professional drivers, tailored to your schedule and requirements.",
        image: "/assets/gallery2.jpg",
        features: ["Professional Service", "Dedicated Vehicles & Drivers", "Flexible Schedules", "Customized Solutions"],
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    let header_ref = use_node_ref();
    let cards_ref = use_node_ref();

    use_reveal(
        header_ref.clone(),
        RevealScope::Children,
        RevealOptions::rise(60.0).with_stagger(0.2),
    );
    use_reveal(
        cards_ref.clone(),
        RevealScope::Children,
        RevealOptions::rise(100.0).with_scale(0.9).with_stagger(0.15),
    );

    let book = whatsapp_link(None);

    html! {
        <section id="services" class="services-section">
            <div class="section-inner">
                <div ref={header_ref} class="section-header">
                    <h2>{"Our "}<span class="text-primary">{"Services"}</span></h2>
                    <p>
                        {"From daily shuttles to luxury tours, we provide comprehensive transport solutions tailored to meet your specific needs across South Africa."}
                    </p>
                </div>

                <div ref={cards_ref} class="services-grid">
                    {
                        SERVICES.iter().map(|service| html! {
                            <div class="service-card">
                                <div class="service-image">
                                    <img src={service.image} alt={service.title} />
                                    <div class="service-image-tint"></div>
                                    <div class="service-icon">{service.icon}</div>
                                </div>
                                <div class="service-body">
                                    <h3>{service.title}</h3>
                                    <p>{service.description}</p>
                                    <div class="service-features">
                                        {
                                            service.features.iter().map(|feature| html! {
                                                <div class="service-feature"><span class="dot"></span>{*feature}</div>
                                            }).collect::<Html>()
                                        }
                                    </div>
                                    <a href={book.clone()} target="_blank" rel="noopener noreferrer" class="service-link">
                                        {"Book This Service →"}
                                    </a>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div class="services-custom">
                    <h3>{"Need a Custom Transport Solution?"}</h3>
                    <p>
                        {"We specialize in creating tailored transport packages that perfectly match your unique requirements. Let's discuss your needs and create the perfect solution."}
                    </p>
                    <a href={book.clone()} target="_blank" rel="noopener noreferrer" class="btn-outline">
                        {"Get Custom Quote →"}
                    </a>
                </div>
            </div>

            <style>
                {r#"
                .services-section {
                    padding: 5rem 0;
                    background: var(--background);
                }

                .services-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }

                .service-card {
                    background: #fff;
                    border-radius: 1rem;
                    padding: 1.5rem;
                    box-shadow: var(--shadow-soft);
                    cursor: pointer;
                    transition: box-shadow 0.5s ease;
                }

                .service-card:hover {
                    box-shadow: var(--shadow-large);
                }

                .service-image {
                    position: relative;
                    height: 12rem;
                    overflow: hidden;
                    border-radius: 0.75rem;
                    margin-bottom: 1.5rem;
                }

                .service-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }

                .service-card:hover .service-image img {
                    transform: scale(1.1);
                }

                .service-image-tint {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top right, rgba(37, 99, 235, 0.3), rgba(249, 115, 22, 0.3));
                }

                .service-icon {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.9);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                }

                .service-body h3 {
                    font-size: 1.5rem;
                    margin: 0 0 1rem;
                    transition: color 0.3s ease;
                }

                .service-card:hover .service-body h3 {
                    color: var(--primary);
                }

                .service-body p {
                    color: var(--muted);
                    line-height: 1.7;
                }

                .service-features {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }

                .service-feature {
                    display: flex;
                    align-items: center;
                    font-size: 0.875rem;
                    color: var(--muted);
                }

                .service-feature .dot {
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: var(--accent);
                    margin-right: 0.5rem;
                }

                .service-link {
                    display: inline-block;
                    padding-top: 1rem;
                    color: var(--primary);
                    font-weight: 600;
                    text-decoration: none;
                    transition: transform 0.3s ease, color 0.3s ease;
                }

                .service-card:hover .service-link {
                    transform: translateX(0.5rem);
                    color: var(--accent);
                }

                .services-custom {
                    margin-top: 4rem;
                    text-align: center;
                    border-radius: 1rem;
                    padding: 2rem;
                    color: #fff;
                    background: linear-gradient(to right, var(--primary), var(--accent));
                }

                .services-custom h3 {
                    font-size: 1.5rem;
                    margin: 0 0 1rem;
                }

                .services-custom p {
                    color: rgba(255, 255, 255, 0.9);
                    max-width: 42rem;
                    margin: 0 auto 1.5rem;
                }

                @media (max-width: 1024px) {
                    .services-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
