use safebuy_domain::constants::{
    ABOUT, ABOUT_HEADING, BRAND, FOOTER, FOOTER_NOTICE, HEADER, NAV_ABOUT_LABEL,
};

#[test]
fn constants_match_section_strings() {
    assert_eq!(HEADER, "header");
    assert_eq!(ABOUT, "about");
    assert_eq!(FOOTER, "footer");
}

#[test]
fn copy_deck_is_frozen() {
    assert_eq!(BRAND, "SafeBuy");
    assert_eq!(NAV_ABOUT_LABEL, "About");
    assert_eq!(ABOUT_HEADING, "About SafeBuy");
    assert_eq!(
        FOOTER_NOTICE,
        "© 2026 SafeBuy. All rights reserved. This is a demo project. Don't rely on us."
    );
}
