use dioxus::prelude::*;

fn requested_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = requested_path(&segments);
    use_hook({
        let path = path.clone();
        move || log::warn!("No page at {}", path)
    });

    rsx! {
        div { id: "page-not-found",
            h1 { class: "page-title", "Page not found" }
            p { class: "page-subtitle", "There is nothing at {path}." }
            a { href: "/", "Back home" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static WARNINGS: Mutex<Vec<String>> = Mutex::new(Vec::new());

    struct WarningLog;

    impl log::Log for WarningLog {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                WARNINGS.lock().unwrap().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: WarningLog = WarningLog;

    #[test]
    fn test_requested_path_rebuilds_segments() {
        assert_eq!(requested_path(&[]), "/");
        assert_eq!(
            requested_path(&["blog".to_string(), "2024".to_string()]),
            "/blog/2024"
        );
    }

    #[test]
    fn test_missing_page_warns_once_across_renders() {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Warn);

        let props = PageNotFoundProps::builder()
            .segments(vec!["old-blog".to_string()])
            .build();
        let mut dom = VirtualDom::new_with_props(PageNotFound, props);
        dom.rebuild_in_place();
        for _ in 0..3 {
            dom.mark_dirty(ScopeId::APP);
            dom.render_immediate_to_vec();
        }

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("There is nothing at /old-blog."));
        assert!(html.contains(r#"href="/""#));

        let warnings = WARNINGS.lock().unwrap();
        let count = warnings
            .iter()
            .filter(|w| w.as_str() == "No page at /old-blog")
            .count();
        assert_eq!(count, 1);
    }
}
