#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // Development URL when running with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://mtsekutransport.co.za"
}

pub const COMPANY_NAME: &str = "Mtseku Transport Services";

pub const WHATSAPP_NUMBER: &str = "27788686706";
pub const PHONE_NUMBER: &str = "+27788686706";
pub const PHONE_DISPLAY: &str = "+27 78 868 6706";
pub const SUPPORT_EMAIL: &str = "Tony.Noyila@outlook.com";

pub const WHATSAPP_GREETING: &str =
    "Hello! I'm interested in your transport services. Could you please provide more information?";

/// Third-party relay that forwards booking form posts to the support inbox.
pub fn booking_relay_url() -> String {
    format!("https://formsubmit.co/{}", SUPPORT_EMAIL)
}

pub const BOOKING_SUBJECT: &str = "New Booking Request - Mtseku Transport";

/// Where the relay sends the visitor after a successful post.
pub fn booking_redirect_url() -> String {
    format!("{}/thank-you", get_site_url())
}

pub const WHATSAPP_FLOAT_DELAY_MS: u32 = 2_000;
pub const WHATSAPP_TOOLTIP_HIDE_MS: u32 = 7_000;
