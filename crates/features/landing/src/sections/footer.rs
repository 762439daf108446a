use crate::provider::use_theme;
use dioxus::prelude::*;
use safebuy_domain::constants::FOOTER_NOTICE;

/// Footer carrying the audited disclaimer notice.
#[component]
pub fn Footer() -> Element {
    let theme = use_theme();
    let notice_style = format!("color: {};", theme.palette.ink);

    rsx! {
        footer { class: "sb-footer",
            p { class: "sb-footer-notice", style: notice_style, "{FOOTER_NOTICE}" }
        }
    }
}
