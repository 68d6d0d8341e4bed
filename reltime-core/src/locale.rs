//! Locale tag normalization.
//!
//! Only two phrasing tables exist: the default (English) one and a Portuguese
//! one selected by any tag starting with `pt` (`pt`, `pt-br`, `pt-PT`, ...).

/// Tag used when no locale is supplied.
pub const DEFAULT_LOCALE_TAG: &str = "en";

/// Normalize an optional locale identifier to a lower-cased tag.
///
/// No validation is done against a locale registry; anything non-empty is
/// passed through lower-cased.
pub fn resolve_locale_tag(locale: Option<&str>) -> String {
    match locale {
        None | Some("") => DEFAULT_LOCALE_TAG.to_string(),
        Some(locale) => locale.to_lowercase(),
    }
}

/// Phrasing table selected by a locale tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LocaleVariant {
    #[default]
    Default,
    Portuguese,
}

impl LocaleVariant {
    /// Resolve the variant for an optional locale identifier.
    pub fn resolve(locale: Option<&str>) -> Self {
        if resolve_locale_tag(locale).starts_with("pt") {
            LocaleVariant::Portuguese
        } else {
            LocaleVariant::Default
        }
    }

    /// Regional variant used for absolute short dates.
    pub fn region(&self) -> Region {
        match self {
            LocaleVariant::Default => Region::EnUs,
            LocaleVariant::Portuguese => Region::PtBr,
        }
    }
}

/// Regional formatting variant for calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// `Oct 5`
    EnUs,
    /// `5 de out.`
    PtBr,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::EnUs => "en-US",
            Region::PtBr => "pt-BR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_locale_defaults_to_en() {
        assert_eq!(resolve_locale_tag(None), "en");
        assert_eq!(resolve_locale_tag(Some("")), "en");
    }

    #[test]
    fn test_locale_is_lowercased_not_validated() {
        assert_eq!(resolve_locale_tag(Some("pt-BR")), "pt-br");
        assert_eq!(resolve_locale_tag(Some("XX-Nope")), "xx-nope");
    }

    #[test]
    fn test_variant_dispatch() {
        assert_eq!(LocaleVariant::resolve(None), LocaleVariant::Default);
        assert_eq!(LocaleVariant::resolve(Some("en-GB")), LocaleVariant::Default);
        assert_eq!(LocaleVariant::resolve(Some("pt")), LocaleVariant::Portuguese);
        assert_eq!(LocaleVariant::resolve(Some("PT-br")), LocaleVariant::Portuguese);
        assert_eq!(LocaleVariant::Portuguese.region(), Region::PtBr);
        assert_eq!(LocaleVariant::Default.region().as_str(), "en-US");
    }
}
