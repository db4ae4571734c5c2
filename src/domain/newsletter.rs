// src/domain/newsletter.rs

/// How long the status message stays on screen.
pub const STATUS_DISPLAY_MS: u64 = 4000;

const ACCENT_COLOR: &str = "#c5a059";
const ERROR_COLOR: &str = "#ff4d4d";

/// Outcome of one newsletter signup attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Subscribed { email: String },
    InvalidEmail { input: String },
}

impl SubscriptionStatus {
    /// Accepts anything non-empty with an `@` in it.
    pub fn from_input(raw: &str) -> Self {
        let email = raw.trim();
        if !email.is_empty() && email.contains('@') {
            SubscriptionStatus::Subscribed {
                email: email.to_string(),
            }
        } else {
            SubscriptionStatus::InvalidEmail {
                input: raw.to_string(),
            }
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SubscriptionStatus::Subscribed { .. } => {
                "Thank you for subscribing to our elite listings."
            }
            SubscriptionStatus::InvalidEmail { .. } => "Please enter a valid email address.",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SubscriptionStatus::Subscribed { .. } => ACCENT_COLOR,
            SubscriptionStatus::InvalidEmail { .. } => ERROR_COLOR,
        }
    }

    /// What the email box should hold after the attempt.
    pub fn input_after(&self) -> &str {
        match self {
            SubscriptionStatus::Subscribed { .. } => "",
            SubscriptionStatus::InvalidEmail { input } => input,
        }
    }
}
