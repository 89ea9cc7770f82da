// Name normalization and tokenization

/// Low-information qualifiers dropped before scoring: variant suffixes,
/// certification tiers, unit words. Configurable through MatcherConfig;
/// this is the shipped default.
pub const STOPWORDS: [&str; 10] = [
    "xt", "ti", "super", "w", "plus", "gold", "bronze", "platinum", "pcie5", "mhz",
];

/// Lowercases and strips everything outside `[a-z0-9 ]`, then trims.
/// Stripped characters are deleted, not replaced with spaces, so
/// "i5-13400" becomes "i513400".
pub fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Splits a normalized string into words and drops stopwords.
pub fn tokenize(input: &str, stopwords: &[String]) -> Vec<String> {
    normalize(input)
        .split(' ')
        .filter(|t| !t.is_empty())
        .filter(|t| !stopwords.iter().any(|s| s == t))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_stopwords() -> Vec<String> {
        STOPWORDS.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn normalize_keeps_only_lowercase_alnum_and_space() {
        for input in [
            "AMD Ryzen™ 5 5600X",
            "  Intel Core i5-13400  ",
            "Corsair RM650x (650 W, 80+ Gold)",
            "",
            "!!!",
        ] {
            let out = normalize(input);
            assert!(
                out.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '),
                "bad char in {out:?}"
            );
            assert_eq!(out, out.trim());
        }
    }

    #[test]
    fn normalize_deletes_instead_of_replacing() {
        assert_eq!(normalize("Intel Core i5-13400"), "intel core i513400");
        assert_eq!(normalize("970 Evo Plus"), "970 evo plus");
    }

    #[test]
    fn tokenize_drops_variant_suffixes() {
        let tokens = tokenize("RTX 4070 Ti Super", &default_stopwords());
        assert_eq!(tokens, vec!["rtx", "4070"]);
    }

    #[test]
    fn tokenize_drops_certification_and_unit_words() {
        let tokens = tokenize("650W 80 Plus Gold", &default_stopwords());
        assert_eq!(tokens, vec!["650w", "80"]);
    }

    #[test]
    fn tokenize_skips_empty_segments() {
        let tokens = tokenize("  Samsung   970  ", &default_stopwords());
        assert_eq!(tokens, vec!["samsung", "970"]);
    }

    #[test]
    fn stopword_set_is_configurable() {
        let custom = vec!["samsung".to_string()];
        let tokens = tokenize("Samsung 970 Evo Plus", &custom);
        assert_eq!(tokens, vec!["970", "evo", "plus"]);
    }
}
