//! Message templates and phone-number tokens.

use rand::Rng;

/// Placeholder substituted with a phone token.
pub const PHONE_PLACEHOLDER: &str = "{phone}";

pub const DEFAULT_TEMPLATES: [&str; 4] = [
    "User {phone} accessed the system",
    "Customer {phone} logged in from web",
    "Call from {phone} failed authentication",
    "Support ticket opened by {phone}",
];

pub const DEFAULT_TENANTS: [&str; 3] = ["tenant-1", "tenant-2", "tenant-3"];

/// Draw a `555-XXX-XXXX` token, XXX in 100..=999 and XXXX in 1000..=9999.
pub fn random_phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    let exchange: u16 = rng.gen_range(100..=999);
    let line: u16 = rng.gen_range(1000..=9999);
    format!("555-{}-{}", exchange, line)
}

/// Substitute the phone token into a template.
pub fn render(template: &str, phone: &str) -> String {
    template.replace(PHONE_PLACEHOLDER, phone)
}
