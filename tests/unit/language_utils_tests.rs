/*!
 * Tests for locale utilities
 */

use xliffgen::language_utils::{get_language_name, primary_subtag, validate_locale};

#[test]
fn test_validate_locale_withValidLocales_shouldSucceed() {
    for locale in ["en", "fr", "pt-BR", "zh_Hant_TW", "deu", "ger", "en-US-posix"] {
        assert!(validate_locale(locale).is_ok(), "{} should be valid", locale);
    }
}

#[test]
fn test_validate_locale_withInvalidLocales_shouldFail() {
    for locale in ["", "   ", "xx", "english", "en-", "en-U$"] {
        assert!(validate_locale(locale).is_err(), "{:?} should be invalid", locale);
    }
}

#[test]
fn test_primary_subtag_shouldSplitOnDashAndUnderscore() {
    assert_eq!(primary_subtag("pt-BR"), "pt");
    assert_eq!(primary_subtag("zh_Hant"), "zh");
    assert_eq!(primary_subtag(" fr "), "fr");
}

#[test]
fn test_get_language_name_withBibliographicCode_shouldResolveTerminologicalLanguage() {
    assert_eq!(get_language_name("ger").unwrap(), "German");
    assert_eq!(get_language_name("fre-CA").unwrap(), "French");
}

#[test]
fn test_get_language_name_withLocale_shouldReturnEnglishName() {
    assert_eq!(get_language_name("fr-CA").unwrap(), "French");
    assert_eq!(get_language_name("es").unwrap(), "Spanish");
    assert!(get_language_name("xyz1").is_err());
}
