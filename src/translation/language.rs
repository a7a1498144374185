//! Language code validation and supported languages.

use anyhow::Result;

use crate::ui::Style;

/// Language codes accepted by the translation backends, with display names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("BG", "Bulgarian"),
    ("CS", "Czech"),
    ("DA", "Danish"),
    ("DE", "German"),
    ("EL", "Greek"),
    ("EN", "English"),
    ("ES", "Spanish"),
    ("ET", "Estonian"),
    ("FI", "Finnish"),
    ("FR", "French"),
    ("HU", "Hungarian"),
    ("ID", "Indonesian"),
    ("IT", "Italian"),
    ("JA", "Japanese"),
    ("KO", "Korean"),
    ("LT", "Lithuanian"),
    ("LV", "Latvian"),
    ("NB", "Norwegian (Bokmål)"),
    ("NL", "Dutch"),
    ("PL", "Polish"),
    ("PT", "Portuguese"),
    ("RO", "Romanian"),
    ("RU", "Russian"),
    ("SK", "Slovak"),
    ("SL", "Slovenian"),
    ("SV", "Swedish"),
    ("TR", "Turkish"),
    ("UK", "Ukrainian"),
    ("ZH", "Chinese"),
];

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes"));
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {:4} {}", Style::code(code), Style::secondary(name));
    }
}

/// Validates a language code, case-insensitively.
///
/// # Errors
///
/// Returns an error if the code is not in the supported list.
pub fn validate_language(lang: &str) -> Result<()> {
    if SUPPORTED_LANGUAGES
        .iter()
        .any(|(code, _)| code.eq_ignore_ascii_case(lang))
    {
        Ok(())
    } else {
        anyhow::bail!(
            "Invalid language code: '{lang}'\n\n\
             Valid codes: EN, ZH, JA, DE, FR, ES, ...\n\
             Run 'dlt languages' to see all supported codes."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_language_valid() {
        assert!(validate_language("EN").is_ok());
        assert!(validate_language("ZH").is_ok());
        assert!(validate_language("NB").is_ok());
    }

    #[test]
    fn test_validate_language_is_case_insensitive() {
        assert!(validate_language("en").is_ok());
        assert!(validate_language("zh").is_ok());
    }

    #[test]
    fn test_validate_language_invalid() {
        assert!(validate_language("KLINGON").is_err());
        assert!(validate_language("").is_err());
    }
}
