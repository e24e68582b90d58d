use dioxus::prelude::*;

#[component]
pub fn Writing() -> Element {
    rsx! {
        div { id: "writing-page",
            h1 { class: "page-title", "Writing" }
            p { class: "page-subtitle",
                "Essays, reflections, and thoughts on life, design, and everything in between."
            }
            p { class: "page-body",
                "Essays, blog posts and other pieces will show up here as they get written."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writing_heading_rendered_once() {
        let html = crate::views::render_page(Writing);
        assert_eq!(html.matches(">Writing</h1>").count(), 1);
    }
}
