use safebuy_domain::theme::Theme;
use safebuy_kernel::style::{StyleError, StyleGuard};

#[test]
fn default_theme_passes_validation() {
    StyleGuard::verify_theme(&Theme::default()).expect("shipped defaults must validate");
}

#[test]
fn poisoned_theme_is_rejected_with_token_name() {
    let mut theme = Theme::default();
    theme.palette.accent = "red;}</style><script>".to_owned();

    let err = StyleGuard::verify_theme(&theme).expect_err("markup must not pass");
    let StyleError::Rejected { token, .. } = err;
    assert_eq!(token, "palette.accent");
}

#[test]
fn length_units_are_whitelisted() {
    assert!(StyleGuard::verify_length("spacing.gutter", "24px").is_ok());
    assert!(StyleGuard::verify_length("spacing.gutter", "1.5rem").is_ok());
    assert!(StyleGuard::verify_length("spacing.gutter", "100%").is_ok());

    assert!(StyleGuard::verify_length("spacing.gutter", "24 px").is_err());
    assert!(StyleGuard::verify_length("spacing.gutter", "url(x)").is_err());
}
