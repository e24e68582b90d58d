use super::Section;
use dioxus::prelude::*;

#[component]
pub fn Learning() -> Element {
    rsx! {
        Section { id: "learning", title: "Learning",
            p { "Things I am currently learning: classes, topics, research directions and whatever else has my attention." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learning_renders_its_section() {
        let html = crate::views::render_page(Learning);
        assert!(html.contains(r#"id="learning""#));
        assert_eq!(html.matches(">Learning</h2>").count(), 1);
    }
}
