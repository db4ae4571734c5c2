use crate::tests::utils::{fixture_app, get, post_form};

#[test]
fn valid_email_gets_thank_you_and_cleared_input() {
    let app = fixture_app();

    let (status, body) = post_form(&app, "/newsletter", "email=jane%40example.com");

    assert_eq!(status, 200);
    assert!(body.contains("Thank you for subscribing to our elite listings."));
    assert!(body.contains("color: #c5a059"));
    assert!(body.contains("4000ms"));
    assert!(body.contains("value=\"\""));
}

#[test]
fn invalid_email_gets_error_and_keeps_input() {
    let app = fixture_app();

    let (status, body) = post_form(&app, "/newsletter", "email=not-an-email");

    assert_eq!(status, 200);
    assert!(body.contains("Please enter a valid email address."));
    assert!(body.contains("color: #ff4d4d"));
    assert!(body.contains("value=\"not-an-email\""));
}

#[test]
fn newsletter_only_accepts_post() {
    let app = fixture_app();

    let (status, _) = get(&app, "/newsletter");

    assert_eq!(status, 404);
}

#[test]
fn status_animation_is_defined_on_the_page() {
    let app = fixture_app();

    let (_, fragment) = post_form(&app, "/newsletter", "email=a%40b.c");
    let (_, home) = get(&app, "/");

    assert!(fragment.contains("animation: newsletter-hide"));
    assert!(home.contains("@keyframes newsletter-hide"));
    assert!(home.contains("id=\"newsletter-msg\""));
}
