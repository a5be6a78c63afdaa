//! i18next plural suffix handling.

/// Plural categories, named after the i18next key suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralCategory {
    One,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::One => "_one",
            Self::Few => "_few",
            Self::Many => "_many",
            Self::Other => "_other",
        }
    }

    /// Cardinal category of `count` for the language part of `locale`.
    ///
    /// Covers the rule families the default client ships with; unknown
    /// languages use the English rule.
    #[must_use]
    pub fn for_count(locale: &str, count: u64) -> Self {
        let language = locale.split(['-', '_']).next().unwrap_or(locale);

        match language {
            "ja" | "zh" | "ko" | "th" | "vi" | "id" | "ms" => Self::Other,
            "fr" | "pt" => {
                if count <= 1 {
                    Self::One
                } else {
                    Self::Other
                }
            }
            "ru" | "uk" | "be" => east_slavic(count),
            "pl" => {
                if count == 1 {
                    Self::One
                } else {
                    match east_slavic(count) {
                        Self::Few => Self::Few,
                        _ => Self::Many,
                    }
                }
            }
            _ => {
                if count == 1 {
                    Self::One
                } else {
                    Self::Other
                }
            }
        }
    }
}

fn east_slavic(count: u64) -> PluralCategory {
    let (mod10, mod100) = (count % 10, count % 100);
    if mod10 == 1 && mod100 != 11 {
        PluralCategory::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralCategory::Few
    } else {
        PluralCategory::Many
    }
}

/// Suffixes to try, most specific first.
///
/// `_zero` is tried for a zero count before the language category, and
/// `_other` is always the last resort.
#[must_use]
pub fn suffix_candidates(locale: &str, count: u64) -> Vec<&'static str> {
    let mut suffixes = Vec::with_capacity(3);
    if count == 0 {
        suffixes.push("_zero");
    }
    let category = PluralCategory::for_count(locale, count);
    suffixes.push(category.suffix());
    if category != PluralCategory::Other {
        suffixes.push(PluralCategory::Other.suffix());
    }
    suffixes
}
