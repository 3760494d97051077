//! Static language table: Russian language adjective <-> ISO-639-1 code.
//!
//! Loaded once into process-wide state and read-only thereafter. Keys
//! are capitalized adjectives as the parser reconstructs them from
//! utterance tokens ("с английского" -> "Английский"). Only adjectives
//! the suffix scan can actually reach (ending in "ский") are listed.

/// (display adjective, ISO-639-1 code) pairs.
const ENTRIES: &[(&str, &str)] = &[
    ("Английский", "en"),
    ("Русский", "ru"),
    ("Французский", "fr"),
    ("Испанский", "es"),
    ("Итальянский", "it"),
    ("Португальский", "pt"),
    ("Польский", "pl"),
    ("Чешский", "cs"),
    ("Болгарский", "bg"),
    ("Сербский", "sr"),
    ("Хорватский", "hr"),
    ("Украинский", "uk"),
    ("Белорусский", "be"),
    ("Латышский", "lv"),
    ("Литовский", "lt"),
    ("Эстонский", "et"),
    ("Финский", "fi"),
    ("Шведский", "sv"),
    ("Датский", "da"),
    ("Норвежский", "no"),
    ("Голландский", "nl"),
    ("Венгерский", "hu"),
    ("Румынский", "ro"),
    ("Греческий", "el"),
    ("Арабский", "ar"),
    ("Персидский", "fa"),
    ("Японский", "ja"),
    ("Китайский", "zh"),
    ("Корейский", "ko"),
    ("Вьетнамский", "vi"),
    ("Тайский", "th"),
    ("Индонезийский", "id"),
    ("Монгольский", "mn"),
    ("Армянский", "hy"),
    ("Грузинский", "ka"),
    ("Латинский", "la"),
];

/// Bidirectional adjective <-> code lookup over the static entries.
pub struct LanguageTable;

impl LanguageTable {
    /// ISO code for a capitalized language adjective. Miss -> `None`,
    /// never an error.
    pub fn code_for(name: &str) -> Option<&'static str> {
        ENTRIES.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
    }

    /// Display adjective for an ISO code (reverse lookup, used to
    /// re-derive the naming phrase for removal from the payload).
    pub fn name_for(code: &str) -> Option<&'static str> {
        ENTRIES.iter().find(|(_, c)| *c == code).map(|(n, _)| *n)
    }

    /// All ISO codes in the table.
    pub fn codes() -> impl Iterator<Item = &'static str> {
        ENTRIES.iter().map(|(_, c)| *c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_lookup() {
        assert_eq!(LanguageTable::code_for("Английский"), Some("en"));
        assert_eq!(LanguageTable::code_for("Японский"), Some("ja"));
    }

    #[test]
    fn test_miss_is_none() {
        assert_eq!(LanguageTable::code_for("Клингонский"), None);
        assert_eq!(LanguageTable::name_for("xx"), None);
    }

    #[test]
    fn test_roundtrip_every_code() {
        for code in LanguageTable::codes() {
            let name = LanguageTable::name_for(code).unwrap();
            assert_eq!(LanguageTable::code_for(name), Some(code));
        }
    }

    #[test]
    fn test_every_adjective_is_suffix_reachable() {
        // The parser only resolves adjectives whose lowercase form the
        // suffix scan can find ("ский" for targets, "ского" genitive for
        // sources), so every entry must end accordingly.
        for (name, _) in ENTRIES {
            let lower = name.to_lowercase();
            assert!(lower.ends_with("ский"), "unreachable adjective: {name}");
        }
    }
}
