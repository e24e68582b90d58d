use crate::content::{ProjectRecord, SiteContent};
use dioxus::prelude::*;

#[component]
pub fn Projects() -> Element {
    let content = use_context::<SiteContent>();

    rsx! {
        div { id: "projects-page",
            h1 { class: "page-title", "Projects" }
            p { class: "page-subtitle", "A few things I have built or worked on recently." }
            div { class: "project-grid",
                for project in content.projects {
                    ProjectCard { key: "{project.title}", project }
                }
            }
        }
    }
}

// Cards with a real link open it in a new tab, placeholders are inert.
#[component]
fn ProjectCard(project: ProjectRecord) -> Element {
    match project.external_link() {
        Some(url) => rsx! {
            a {
                class: "project-card",
                href: "{url}",
                target: "_blank",
                rel: "noreferrer",
                CardBody { project: project.clone() }
            }
        },
        None => rsx! {
            div { class: "project-card placeholder",
                CardBody { project: project.clone() }
            }
        },
    }
}

#[component]
fn CardBody(project: ProjectRecord) -> Element {
    rsx! {
        if let Some(image) = &project.image {
            img {
                class: "card-media",
                src: "{image}",
                alt: "{project.title} preview",
            }
        } else {
            div { class: "card-media empty",
                span { "Image placeholder" }
            }
        }
        div { class: "card-content",
            span { class: "card-category", "{project.category}" }
            h2 { class: "card-title", "{project.title}" }
            p { class: "card-description", "{project.description}" }
        }
    }
}
