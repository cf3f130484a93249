//! B[U]ILT X Urban Planning Initiative page
//!
//! A static informational page for urban planners in Chicago with the
//! "Greeny" assistant widget.
//!
//! Data flow:
//! 1. The backend address comes from `UPI_API_BASE` at compile time, or the
//!    local development default.
//! 2. On mount: fetch the community-area CSV once and fill the neighborhood
//!    dropdown. A failed fetch leaves just the placeholder option.
//! 3. On "Run chat": the analysis widget POSTs the form to `/chat` and shows
//!    the returned text or the error.

use dioxus::prelude::*;
use upi_core::AnalysisConfig;
use upi_page_ui::components::{AnalysisPanel, NeighborhoodSelector, SiteHeader};
use upi_page_ui::js_bridge;
use upi_page_ui::state::AppState;

const PAGE_TITLE: &str = "B[U]ILT X Urban Planning Initiative";

/// Community areas CSV served next to the WASM bundle.
const NEIGHBORHOODS_CSV_URL: &str = "./datasets/CCA_25_chi_csv.csv";

/// Optional backend override baked in at build time.
const API_BASE_OVERRIDE: Option<&str> = option_env!("UPI_API_BASE");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("main"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(|| AppState::new(AnalysisConfig::from_override(API_BASE_OVERRIDE)));

    // ─── Load dropdown options once on mount ───
    use_effect(move || {
        js_bridge::set_document_title(PAGE_TITLE);
        log::info!("Analysis backend: {}", state.config.peek().base_url);
        spawn(state.load_neighborhoods(NEIGHBORHOODS_CSV_URL));
    });

    // ─── Render ───
    rsx! {
        div {
            class: "App",
            style: "font-family: system-ui, -apple-system, sans-serif; background: rgb(0, 91, 77); color: #fff; min-height: 100vh;",

            SiteHeader {
                title: PAGE_TITLE.to_string(),
                logo_href: "https://built-illinois.org/#/Home".to_string(),
                logo_src: "built-logo.png".to_string(),
                logo_alt: "Built Logo".to_string(),
            }

            IntroSection {}
            AssistantSection {}
            DashboardSection {}
        }
    }
}

/// Mission statement next to the Chicago map.
#[component]
fn IntroSection() -> Element {
    rsx! {
        div {
            class: "content-wrapper",
            style: "display: flex; flex-wrap: wrap; gap: 24px; padding: 24px; align-items: center;",
            div {
                id: "box1",
                style: "flex: 1; min-width: 260px; font-size: 18px;",
                p {
                    "This website is a tool for urban planners that leverages data to provide appropriate initiatives in the city of Chicago. Our considerations include, but are not limited to, population density, pollution, and available green spaces."
                }
            }
            div {
                id: "map",
                img { src: "chi-map.png", alt: "Chicago Map", width: "766", height: "458" }
            }
        }
    }
}

/// "Greeny" the assistant, hosting the analysis widget.
#[component]
fn AssistantSection() -> Element {
    rsx! {
        div {
            class: "greenytro",
            style: "display: flex; flex-wrap: wrap; gap: 24px; padding: 24px; align-items: center;",
            div {
                id: "box2",
                style: "flex: 1; min-width: 300px;",
                p { "As you use our urban planning tool we also have our personal assistant Greeny at your disposal!" }
                NeighborhoodSelector {}
                AnalysisPanel {}
            }
            div {
                class: "greeny-logo-container",
                img { src: "rgreeny.png", alt: "greeny", width: "300", height: "300" }
            }
        }
    }
}

#[component]
fn DashboardSection() -> Element {
    rsx! {
        div {
            class: "Gen_Dashboard",
            style: "padding: 24px;",
            div {
                id: "banner",
                style: "font-size: 28px; font-weight: bold;",
                p { "Chicago Dashboard" }
            }
            div {
                id: "mini-banner",
                p { "The following dashboard provides visualizations based on data from the general Chicago Land area!" }
            }
        }
    }
}
