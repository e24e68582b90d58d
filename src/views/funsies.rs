use super::Section;
use dioxus::prelude::*;

#[component]
pub fn Funsies() -> Element {
    rsx! {
        Section { id: "funsies", title: "Funsies",
            p { "Side quests, small experiments and things made just because." }
        }
    }
}
