use crate::provider::use_theme;
use dioxus::prelude::*;
use safebuy_domain::constants::{ABOUT_COPY, ABOUT_HEADING};
use safebuy_domain::sections::SectionId;

/// The about section, target of the header navigation anchor.
#[component]
pub fn AboutSection() -> Element {
    let theme = use_theme();
    let heading_style = format!("color: {};", theme.palette.secondary);

    rsx! {
        section { id: SectionId::About.anchor(), class: "sb-section",
            h2 { class: "sb-section-heading", style: heading_style, "{ABOUT_HEADING}" }
            p { class: "sb-section-copy", "{ABOUT_COPY}" }
        }
    }
}
