use crate::provider::use_theme;
use crate::scroll::use_nav;
use dioxus::prelude::*;
use safebuy_domain::constants::{BRAND, BRAND_TAGLINE, NAV_ABOUT_LABEL};
use safebuy_domain::sections::SectionId;

/// Fixed top bar: brand label, accent tagline and the about link.
///
/// Styling comes from theme tokens only. The navigation control pairs a
/// real `#about` fragment with the injected navigator, so plain markup
/// scrolls natively while embedders can observe the request.
#[component]
pub fn Header() -> Element {
    let theme = use_theme();
    let nav = use_nav();

    let brand_style = format!("color: {};", theme.palette.primary);
    let tagline_style = format!("color: {};", theme.palette.accent);
    let href = format!("#{}", SectionId::About.anchor());

    rsx! {
        header { class: "sb-header",
            span { class: "sb-header-brand", style: brand_style, "{BRAND}" }
            span { class: "sb-header-tagline", style: tagline_style, "{BRAND_TAGLINE}" }
            nav { class: "sb-header-nav",
                a {
                    class: "sb-nav-link",
                    href: href,
                    onclick: move |_| nav.scroll_to(SectionId::About),
                    "{NAV_ABOUT_LABEL}"
                }
            }
        }
    }
}
