//! Shared string utilities for code generation.

fn words(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
}

/// Convert a string to PascalCase (e.g., "hero-simple" -> "HeroSimple")
///
/// Any non-alphanumeric ASCII character is treated as a word separator.
pub fn to_pascal_case(s: &str) -> String {
    words(s)
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_ascii_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect()
}

/// Convert a string to kebab-case (e.g., "PricingPage" -> "pricing-page")
pub fn to_kebab_case(s: &str) -> String {
    let mut result = String::new();
    for word in words(s) {
        let mut prev_lower = false;
        if !result.is_empty() {
            result.push('-');
        }
        for c in word.chars() {
            if c.is_ascii_uppercase() && prev_lower {
                result.push('-');
            }
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
            result.push(c.to_ascii_lowercase());
        }
    }
    result
}

/// Check whether `s` can be used bare as a JavaScript identifier or JSX attribute name.
///
/// Only the ASCII subset is accepted: letters, digits, `_` and `$`, not starting with a digit.
pub fn is_js_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hero"), "Hero");
        assert_eq!(to_pascal_case("hero-simple"), "HeroSimple");
        assert_eq!(to_pascal_case("pricing_tiers"), "PricingTiers");
        assert_eq!(to_pascal_case("cta banner"), "CtaBanner");
        assert_eq!(to_pascal_case("faqAccordion"), "FaqAccordion");
        assert_eq!(to_pascal_case("--"), "");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("Pricing"), "pricing");
        assert_eq!(to_kebab_case("PricingPage"), "pricing-page");
        assert_eq!(to_kebab_case("landing_v2"), "landing-v2");
        assert_eq!(to_kebab_case("About Us"), "about-us");
        assert_eq!(to_kebab_case("hero-simple"), "hero-simple");
        assert_eq!(to_kebab_case(""), "");
    }

    #[test]
    fn test_is_js_identifier() {
        assert!(is_js_identifier("title"));
        assert!(is_js_identifier("_private"));
        assert!(is_js_identifier("$store"));
        assert!(is_js_identifier("cta2"));
        assert!(!is_js_identifier("2cols"));
        assert!(!is_js_identifier("data-id"));
        assert!(!is_js_identifier("标题"));
        assert!(!is_js_identifier(""));
    }
}
