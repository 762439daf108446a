use safebuy_domain::config::SiteConfig;
use safebuy_domain::sections::SectionSet;
use safebuy_landing::{render_page, render_page_with};

fn occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn full_page_renders_sections_in_order_exactly_once() {
    let page = render_page(&SiteConfig::default()).expect("default config renders");
    let html = page.html();

    assert!(html.starts_with("<!DOCTYPE html>"));

    for marker in ["class=\"sb-header\"", "id=\"about\"", "class=\"sb-footer\""] {
        assert_eq!(occurrences(html, marker), 1, "{marker} should appear exactly once");
    }

    let header_at = html.find("class=\"sb-header\"").expect("header present");
    let about_at = html.find("id=\"about\"").expect("about present");
    let footer_at = html.find("class=\"sb-footer\"").expect("footer present");
    assert!(header_at < about_at, "header renders before the about section");
    assert!(about_at < footer_at, "about section renders before the footer");
}

#[test]
fn copy_deck_and_anchor_pairing_are_present() {
    let page = render_page(&SiteConfig::default()).expect("default config renders");
    let html = page.html();

    assert!(html.contains("SafeBuy"));
    assert!(html.contains("check before you checkout"));
    assert!(html.contains(">About<"));
    assert!(html.contains(">About SafeBuy<"));
    assert!(html.contains("© 2026 SafeBuy. All rights reserved."));
    assert!(html.contains("rely on us."));

    // the nav link must point at the about anchor
    assert!(html.contains("href=\"#about\""));
    assert!(html.contains("id=\"about\""));
}

#[test]
fn rendering_is_byte_identical_across_calls() {
    let config = SiteConfig::default();

    let first = render_page(&config).expect("first render");
    let second = render_page(&config).expect("second render");

    assert_eq!(first, second);
}

#[test]
fn custom_theme_tokens_flow_into_markup() {
    let mut config = SiteConfig::default();
    config.theme.palette.primary = "#123abc".to_owned();

    let page = render_page(&config).expect("custom theme renders");

    assert!(page.html().contains("#123abc"));
    let stock_primary = SiteConfig::default().theme.palette.primary.clone();
    assert!(!page.html().contains(&stock_primary));
}

#[test]
fn page_without_about_keeps_header_and_footer() {
    let config = SiteConfig::default();
    let sections = SectionSet::ALL - SectionSet::ABOUT;

    let page = render_page_with(&config, sections).expect("renders without about");
    let html = page.html();

    assert!(!html.contains("id=\"about\""));
    assert_eq!(occurrences(html, "class=\"sb-header\""), 1);
    assert_eq!(occurrences(html, "class=\"sb-footer\""), 1);

    // the navigation control stays rendered even though its target is gone
    assert!(html.contains("href=\"#about\""));
}

#[test]
fn empty_section_set_yields_a_bare_document() {
    let page = render_page_with(&SiteConfig::default(), SectionSet::empty())
        .expect("empty plan renders");
    let html = page.html();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(!html.contains("class=\"sb-header\""));
    assert!(!html.contains("id=\"about\""));
    assert!(!html.contains("class=\"sb-footer\""));
}

#[test]
fn hostile_theme_value_fails_closed() {
    let mut config = SiteConfig::default();
    config.theme.palette.surface = "white;</style><script>alert(1)</script>".to_owned();

    assert!(render_page(&config).is_err());
}
