//! Parsing tests for theme and language values.

use crate::preferences::domain::{Language, ParseLanguageError, ParseThemeError, Theme};
use rstest::rstest;

#[rstest]
#[case("light", Theme::Light)]
#[case("DARK", Theme::Dark)]
#[case(" system ", Theme::System)]
fn theme_parses_stored_names(#[case] raw: &str, #[case] expected: Theme) {
    assert_eq!(Theme::try_from(raw), Ok(expected));
}

#[test]
fn theme_rejects_unknown_names() {
    assert_eq!(
        Theme::try_from("sepia"),
        Err(ParseThemeError("sepia".to_owned()))
    );
}

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[rstest]
#[case("en", Language::English)]
#[case("es", Language::Spanish)]
#[case("FR", Language::French)]
#[case("de", Language::German)]
#[case("zh", Language::Chinese)]
fn language_parses_codes(#[case] raw: &str, #[case] expected: Language) {
    assert_eq!(Language::try_from(raw), Ok(expected));
    assert_eq!(Language::try_from(expected.code()), Ok(expected));
}

#[test]
fn language_rejects_unknown_codes() {
    assert_eq!(
        Language::try_from("pt"),
        Err(ParseLanguageError("pt".to_owned()))
    );
}
