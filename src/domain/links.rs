// src/domain/links.rs

use url::form_urlencoded::byte_serialize;

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Internal detail page for one property.
pub fn detail_href(id: &str) -> String {
    format!("/property?id={}", encode_component(id))
}

/// WhatsApp deep link with a pre-filled enquiry about the property.
pub fn contact_href(phone: &str, title: &str, location: &str) -> String {
    let message = format!("Hi, I'm interested in {title} in {location}.");
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("{WHATSAPP_BASE}{digits}?text={}", encode_component(&message))
}

// Form encoding writes spaces as '+'; a literal '+' is already %2B.
fn encode_component(raw: &str) -> String {
    byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
