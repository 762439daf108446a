//! Fixed copy and section names for the SafeBuy site.
//!
//! Every string that must stay byte-for-byte stable across renders lives
//! here, so markup, navigation, and tests never drift apart.

/// Product name shown in the header brand label and the page title.
pub const BRAND: &str = "SafeBuy";

/// Accent tagline rendered next to the brand label.
pub const BRAND_TAGLINE: &str = "check before you checkout";

/// Label of the header control that navigates to the about section.
pub const NAV_ABOUT_LABEL: &str = "About";

/// Heading of the about section.
pub const ABOUT_HEADING: &str = "About SafeBuy";

/// Body copy of the about section.
pub const ABOUT_COPY: &str = "SafeBuy screens e-commerce listings for compliance problems \
    before you commit to a purchase. Paste a product page and automated checks flag missing \
    seller details, vague return policies and misleading pricing, so you can shop with \
    confidence.";

/// Footer notice. The wording is audited, keep it verbatim.
pub const FOOTER_NOTICE: &str =
    "© 2026 SafeBuy. All rights reserved. This is a demo project. Don't rely on us.";

// Section names. `ABOUT` doubles as the in-page anchor id, so the header
// link and the section element always agree on a single value.
pub const HEADER: &str = "header";
pub const ABOUT: &str = "about";
pub const FOOTER: &str = "footer";
