use crate::render::Notice;
use maud::{html, Markup};

pub fn notice(n: Notice) -> Markup {
    let class = match n {
        Notice::UnableToLoad => "notice notice-error",
        Notice::NoListingsYet | Notice::NoResults => "notice",
    };

    html! {
        p class=(class) role="status" { (n.message()) }
    }
}
