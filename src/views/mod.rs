//! Page views and layout components of the portfolio site
//!
//! The navbar is the router layout; every page renders inside its outlet
//! and reads the shared [`SiteContent`](crate::content::SiteContent) from
//! context.

/// Navigation bar with the transient highlight
mod navbar;
pub use navbar::Navbar;

/// Titled container used by the simpler pages
mod section;
pub use section::Section;

/// Landing page
mod home;
pub use home::Home;

/// Project cards
mod projects;
pub use projects::Projects;

mod writing;
pub use writing::Writing;

mod learning;
pub use learning::Learning;

mod funsies;
pub use funsies::Funsies;

/// Fallback for unmatched paths
mod not_found;
pub use not_found::PageNotFound;

#[cfg(test)]
pub(crate) fn render_page(page: fn() -> dioxus::prelude::Element) -> String {
    use dioxus::prelude::VirtualDom;

    let content = crate::content::SiteContent::builtin().unwrap();
    let mut dom = VirtualDom::new(page).with_root_context(content);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
