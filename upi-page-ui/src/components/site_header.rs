//! Page header with title and linked logo.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SiteHeaderProps {
    pub title: String,
    /// Where the logo links to
    pub logo_href: String,
    pub logo_src: String,
    #[props(default = String::new())]
    pub logo_alt: String,
}

/// Top banner of the page.
#[component]
pub fn SiteHeader(props: SiteHeaderProps) -> Element {
    rsx! {
        div {
            id: "head",
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 24px; background: rgb(0, 91, 77); color: #fff;",
            p {
                id: "head-text",
                style: "margin: 0; font-size: 24px; font-weight: bold;",
                "{props.title}"
            }
            a {
                href: "{props.logo_href}",
                img {
                    id: "built",
                    src: "{props.logo_src}",
                    alt: "{props.logo_alt}",
                    style: "height: 48px;",
                }
            }
        }
    }
}
