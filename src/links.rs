use log::warn;
use web_sys::window;

use crate::config;

/// `https://wa.me/<number>`, with the message url-encoded into `?text=` when given.
pub fn whatsapp_link(message: Option<&str>) -> String {
    match message {
        Some(text) if !text.is_empty() => format!(
            "https://wa.me/{}?text={}",
            config::WHATSAPP_NUMBER,
            urlencoding::encode(text)
        ),
        _ => format!("https://wa.me/{}", config::WHATSAPP_NUMBER),
    }
}

pub fn tel_link(number: &str) -> String {
    let digits: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", digits)
}

pub fn mailto_link(address: &str) -> String {
    format!("mailto:{}", address)
}

pub fn maps_link(address: &str) -> String {
    format!("https://maps.google.com/?q={}", urlencoding::encode(address))
}

pub fn open_in_new_context(url: &str) {
    let Some(window) = window() else { return };
    if window.open_with_url_and_target(url, "_blank").is_err() {
        warn!("Failed to open {}", url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_without_message() {
        assert_eq!(whatsapp_link(None), "https://wa.me/27788686706");
        assert_eq!(whatsapp_link(Some("")), "https://wa.me/27788686706");
    }

    #[test]
    fn whatsapp_link_encodes_message() {
        let link = whatsapp_link(Some("Hello! Need a ride?"));
        assert_eq!(link, "https://wa.me/27788686706?text=Hello%21%20Need%20a%20ride%3F");
    }

    #[test]
    fn tel_link_strips_spaces() {
        assert_eq!(tel_link("+27 78 868 6706"), "tel:+27788686706");
    }

    #[test]
    fn maps_link_encodes_address() {
        assert_eq!(
            maps_link("11 Bottlebrush St, Ferndale"),
            "https://maps.google.com/?q=11%20Bottlebrush%20St%2C%20Ferndale"
        );
    }

    #[test]
    fn maps_link_keeps_query_delimiters_inside_the_address() {
        assert_eq!(
            maps_link("Unit 4 & 5, Block #2"),
            "https://maps.google.com/?q=Unit%204%20%26%205%2C%20Block%20%232"
        );
    }

    #[test]
    fn mailto() {
        assert_eq!(mailto_link("a@b.co"), "mailto:a@b.co");
    }
}
