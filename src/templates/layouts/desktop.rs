use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const SITE_NAME: &str = "Aurum Estates";

/// Pinned htmx build; the pages' partial swaps depend on it.
pub const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12/dist/htmx.min.js";

// Inline so timed hides work even before the stylesheet arrives.
const INLINE_CSS: &str = "@keyframes newsletter-hide { to { visibility: hidden; opacity: 0; } }";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · " (SITE_NAME) }
                link rel="stylesheet" href="/static/style.css";
                style { (PreEscaped(INLINE_CSS)) }
                script src=(HTMX_SRC) defer {}
            }
            body {
                nav class="navbar" {
                    a href="/" class="logo" { (SITE_NAME) }
                    button class="mobile-menu-toggle" type="button" aria-label="Menu" {
                        span {} span {} span {}
                    }
                    ul class="nav-links" {
                        li { a href="/" { "Home" } }
                        li { a href="/listings" { "Listings" } }
                        li { a href="/#search" { "Search" } }
                        li { a href="/#newsletter" { "Newsletter" } }
                    }
                }

                (content)

                footer class="footer" {
                    p { "© " (SITE_NAME) }
                }
            }
        }
    }
}
