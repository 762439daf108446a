use crate::css;
use crate::provider::ThemeHandle;
use crate::scroll::NavHandle;
use crate::sections::{AboutSection, Footer, Header};
use dioxus::prelude::*;
use safebuy_domain::constants::BRAND;
use safebuy_domain::sections::SectionSet;

/// Everything the page root needs to render one site.
#[derive(Debug, Clone, PartialEq)]
pub struct SitePlan {
    theme: ThemeHandle,
    sections: SectionSet,
    nav: NavHandle,
}

impl SitePlan {
    #[must_use]
    pub fn new(theme: ThemeHandle, sections: SectionSet, nav: NavHandle) -> Self {
        Self { theme, sections, nav }
    }

    #[must_use]
    pub const fn sections(&self) -> SectionSet {
        self.sections
    }

    #[must_use]
    pub const fn theme(&self) -> &ThemeHandle {
        &self.theme
    }
}

/// Document root.
///
/// Provides the theme and navigator to every component through context,
/// then lays the sections out in their fixed order: header, main content,
/// footer. A section missing from the plan is skipped without leaving a
/// placeholder behind.
#[component]
pub fn LandingPage(plan: SitePlan) -> Element {
    let theme = use_context_provider(|| plan.theme.clone());
    use_context_provider(|| plan.nav.clone());

    let css = css::stylesheet(&theme);

    rsx! {
        html { lang: "en",
            head {
                meta { charset: "utf-8" }
                meta { name: "viewport", content: "width=device-width, initial-scale=1" }
                title { "{BRAND}" }
                style { dangerous_inner_html: "{css}" }
            }
            body {
                if plan.sections.contains(SectionSet::HEADER) {
                    Header {}
                }
                main { class: "sb-main",
                    if plan.sections.contains(SectionSet::ABOUT) {
                        AboutSection {}
                    }
                }
                if plan.sections.contains(SectionSet::FOOTER) {
                    Footer {}
                }
            }
        }
    }
}
