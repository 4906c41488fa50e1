use log::debug;
use web_sys::window;
use yew::prelude::*;

use crate::booking::form::Booking;
use crate::gallery::section::Gallery;
use crate::navigation::{scroll_to_section, Nav, Section};
use crate::sections::{
    about::About, contact::Contact, drivers::Drivers, footer::Footer, hero::Hero,
    services::Services, why_us::WhyUs,
};
use crate::whatsapp_float::WhatsAppFloat;

#[function_component(Home)]
pub fn home() -> Html {
    // Honour deep links like `/#booking` once every section has mounted.
    use_effect_with_deps(
        |_| {
            let hash = window()
                .and_then(|w| w.location().hash().ok())
                .unwrap_or_default();
            if let Some(section) = Section::from_anchor(&hash) {
                debug!("Jumping to #{} from URL", section.anchor());
                scroll_to_section(section);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing">
            <Nav />
            <main>
                <Hero />
                <About />
                <Services />
                <Drivers />
                <WhyUs />
                <Gallery />
                <Booking />
                <Contact />
            </main>
            <Footer />
            <WhatsAppFloat />
        </div>
    }
}
