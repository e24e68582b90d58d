use dioxus::prelude::*;

#[component]
pub fn Section(id: String, title: String, children: Element) -> Element {
    rsx! {
        section { id: "{id}", class: "section",
            h2 { class: "section-title", "{title}" }
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_wraps_children_under_title() {
        let html = dioxus_ssr::render_element(rsx! {
            Section { id: "about", title: "About Me",
                p { "This is the about me section." }
            }
        });
        assert!(html.starts_with("<section"));
        assert!(html.contains(r#"id="about""#));
        assert!(html.contains(r#"<h2 class="section-title">About Me</h2>"#));
        assert!(html.contains("<p>This is the about me section.</p>"));
    }
}
