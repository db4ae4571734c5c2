use crate::domain::newsletter::STATUS_DISPLAY_MS;
use crate::domain::SubscriptionStatus;
use crate::render::Region;
use maud::{html, Markup};

pub fn newsletter_form() -> Markup {
    html! {
        section id="newsletter" class="newsletter" {
            h2 { "Private Listings, First" }
            p { "Join the list for estates before they reach the market." }
            form
                class="newsletter-form"
                method="post"
                action="/newsletter"
                hx-post="/newsletter"
                hx-target=(format!("#{}", Region::NewsletterStatus.element_id()))
                hx-swap="outerHTML"
            {
                (newsletter_input("", false))
                button id="newsletter-btn" type="submit" class="btn-primary" { "Subscribe" }
            }
            p id=(Region::NewsletterStatus.element_id()) style="display: none;" {}
        }
    }
}

pub fn newsletter_input(value: &str, swap_oob: bool) -> Markup {
    html! {
        input
            id="newsletter-email"
            type="email"
            name="email"
            placeholder="you@domain.com"
            autocomplete="email"
            value=(value)
            hx-swap-oob=[swap_oob.then_some("true")];
    }
}

/// Status line that fades out on its own after a few seconds.
pub fn newsletter_status(status: &SubscriptionStatus) -> Markup {
    let style = format!(
        "color: {}; display: block; animation: newsletter-hide 0s linear {}ms forwards;",
        status.color(),
        STATUS_DISPLAY_MS
    );

    html! {
        p id=(Region::NewsletterStatus.element_id()) role="status" style=(style) {
            (status.message())
        }
    }
}
