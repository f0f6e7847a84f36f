use anyhow::{Result, anyhow};
use isolang::Language;

// Locale utilities
//
// Locales are written BCP 47 style (`fr`, `en-US`, `zh_Hant_TW`). Only the
// primary language subtag is checked against ISO 639; the remaining subtags
// just have to be well formed.

/// ISO 639-2/B codes that differ from their 639-2/T form
const BIBLIOGRAPHIC_CODES: &[(&str, &str)] = &[
    ("fre", "fra"),
    ("ger", "deu"),
    ("dut", "nld"),
    ("gre", "ell"),
    ("chi", "zho"),
    ("cze", "ces"),
    ("ice", "isl"),
    ("alb", "sqi"),
    ("arm", "hye"),
    ("baq", "eus"),
    ("bur", "mya"),
    ("per", "fas"),
    ("geo", "kat"),
    ("may", "msa"),
    ("mac", "mkd"),
    ("rum", "ron"),
    ("slo", "slk"),
    ("wel", "cym"),
];

/// Split off the primary language subtag of a locale
pub fn primary_subtag(locale: &str) -> &str {
    locale
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
}

/// Resolve a 2 or 3 letter language code to an ISO 639 language
fn lookup_language(code: &str) -> Option<Language> {
    let code = code.to_lowercase();
    match code.len() {
        2 => Language::from_639_1(&code),
        3 => {
            let part2t = BIBLIOGRAPHIC_CODES
                .iter()
                .find(|(bibliographic, _)| *bibliographic == code)
                .map_or(code.as_str(), |&(_, terminological)| terminological);
            Language::from_639_3(part2t)
        }
        _ => None,
    }
}

/// Validate a locale such as `fr`, `pt-BR` or `zh-Hant-TW`
pub fn validate_locale(locale: &str) -> Result<()> {
    let trimmed = locale.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("Locale must not be empty"));
    }

    let primary = primary_subtag(trimmed);
    if lookup_language(primary).is_none() {
        return Err(anyhow!("Invalid language in locale: {}", locale));
    }

    // region/script/variant subtags
    for subtag in trimmed.split(['-', '_']).skip(1) {
        if subtag.is_empty() || subtag.len() > 8 || !subtag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(anyhow!("Invalid subtag '{}' in locale: {}", subtag, locale));
        }
    }

    Ok(())
}

/// Get the English language name for a locale
pub fn get_language_name(locale: &str) -> Result<String> {
    let lang = lookup_language(primary_subtag(locale))
        .ok_or_else(|| anyhow!("Failed to get language from locale: {}", locale))?;

    Ok(lang.to_name().to_string())
}
