use crate::Route;
use crate::content::SiteContent;
use crate::highlight::{HighlightState, LOGO_LABEL, QUIESCENCE};
use dioxus::prelude::*;

/// Highlights `label` and replaces the pending reset task with a fresh one.
fn activate(
    mut highlight: Signal<HighlightState>,
    mut pending: Signal<Option<Task>>,
    label: &str,
) {
    let ticket = highlight.write().activate(label);
    if let Some(task) = pending.write().take() {
        task.cancel();
    }
    let task = spawn(async move {
        crate::timer::sleep(QUIESCENCE).await;
        highlight.write().expire(ticket);
    });
    pending.set(Some(task));
}

fn on_activate(
    highlight: Signal<HighlightState>,
    pending: Signal<Option<Task>>,
    label: String,
) -> impl FnMut(MouseEvent) {
    move |_| activate(highlight, pending, &label)
}

fn logo_style(emphasized: bool) -> &'static str {
    if emphasized {
        "transform: scale(1.15);"
    } else {
        "transform: scale(1);"
    }
}

fn link_style(emphasized: bool) -> &'static str {
    if emphasized {
        "transform: scale(1.2); font-weight: 700;"
    } else {
        "transform: scale(1); font-weight: 400;"
    }
}

#[component]
pub fn Navbar() -> Element {
    let content = use_context::<SiteContent>();
    let highlight = use_signal(HighlightState::default);
    let pending = use_signal(|| None::<Task>);

    let state = highlight.read();

    rsx! {
        nav { id: "navbar",
            Link {
                class: "logo",
                to: Route::Home {},
                style: logo_style(state.is_emphasized(LOGO_LABEL)),
                onclick: on_activate(highlight, pending, LOGO_LABEL.to_string()),
                "{content.owner}"
            }
            div { class: "nav-links",
                for link in content.nav.iter() {
                    Link {
                        key: "{link.label}",
                        class: "nav-link",
                        to: link.target.clone(),
                        style: link_style(state.is_emphasized(&link.label)),
                        onclick: on_activate(highlight, pending, link.label.clone()),
                        "{link.label}"
                    }
                }
            }
        }
        main { class: "page", Outlet::<Route> {} }
    }
}
