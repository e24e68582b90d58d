mod content;
mod highlight;
mod timer;
mod views;

use content::SiteContent;
use dioxus::prelude::*;
use views::{Funsies, Home, Learning, Navbar, PageNotFound, Projects, Writing};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home {},
        #[route("/projects")]
        Projects {},
        #[route("/writing")]
        Writing {},
        #[route("/learning")]
        Learning {},
        #[route("/funsies")]
        Funsies {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

#[cfg(feature = "server")]
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to listen on, overrides the one provided by the dioxus CLI
    #[arg(long)]
    ip: Option<std::net::IpAddr>,
    #[arg(long)]
    port: Option<u16>,
}

#[cfg(feature = "server")]
impl Args {
    fn address(&self, fallback: std::net::SocketAddr) -> std::net::SocketAddr {
        std::net::SocketAddr::new(
            self.ip.unwrap_or(fallback.ip()),
            self.port.unwrap_or(fallback.port()),
        )
    }
}

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;
    use tokio::net::TcpListener;

    env_logger::init();

    let args = Args::parse();

    // refuse to serve a site whose content does not validate
    let content = SiteContent::builtin()?;

    let addr = args.address(dioxus_cli_config::fullstack_address_or_localhost());
    let router = axum::Router::new().serve_dioxus_application(ServeConfig::new()?, App);
    let listener = TcpListener::bind(addr).await?;

    log::info!("Serving {}'s site at http://{}", content.owner, addr);
    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let content = use_hook(|| {
        SiteContent::builtin().map_err(|e| {
            log::error!("Invalid site content: {}", e);
            e.to_string()
        })
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        match content {
            Ok(content) => rsx! {
                Site { content }
            },
            Err(e) => rsx! {
                p { class: "content-error", "{e}" }
            },
        }
    }
}

#[component]
fn Site(content: SiteContent) -> Element {
    use_context_provider(|| content);

    rsx! {
        div { id: "top", Router::<Route> {} }
    }
}
