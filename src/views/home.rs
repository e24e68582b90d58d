use crate::content::{SiteContent, SocialLink};
use dioxus::prelude::*;

const PROFILE_IMAGE: Asset = asset!("/assets/profile.svg");

#[component]
pub fn Home() -> Element {
    let content = use_context::<SiteContent>();

    rsx! {
        div { id: "home-page",
            img {
                class: "avatar",
                src: PROFILE_IMAGE,
                alt: "Profile picture of {content.owner}",
            }
            h1 { class: "greeting", "Hi! I'm {content.owner}." }
            div { class: "intro",
                p {
                    "I'm an undergraduate student at "
                    strong { u { "Northwestern University" } }
                    ", studying "
                    strong { u { "Computer Science" } }
                    ", "
                    strong { u { "Cognitive Science" } }
                    " and "
                    strong { u { "Design" } }
                    "."
                }
                p {
                    "I'm always trying to understand how people "
                    strong { u { "think" } }
                    ", "
                    strong { u { "feel" } }
                    ", and "
                    strong { u { "move through the world" } }
                    ". I split my time between building interfaces, studying the brain, and writing about the messy parts of being human."
                }
                p {
                    "This site is where those threads meet. Part portfolio, part journal, part playground, still very much in progress."
                }
            }
            div { class: "socials",
                for social in content.socials.iter().cloned() {
                    SocialButton { key: "{social.label}", social }
                }
            }
        }
    }
}

#[component]
fn SocialButton(social: SocialLink) -> Element {
    if social.opens_new_tab() {
        rsx! {
            a {
                class: "social-link",
                href: "{social.href}",
                target: "_blank",
                rel: "noreferrer",
                aria_label: "{social.label}",
                "{social.label}"
            }
        }
    } else {
        rsx! {
            a {
                class: "social-link",
                href: "{social.href}",
                aria_label: "{social.label}",
                "{social.label}"
            }
        }
    }
}
