/// Text helpers for labels

/// Upper-case the first character: "kadapa" -> "Kadapa"
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalize every space-separated word: "tourist attraction" -> "Tourist Attraction"
pub fn title_case(text: &str) -> String {
    text.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Last `visible` characters of a secret, for "Key ending with: ..." labels
pub fn mask_secret(secret: &str, visible: usize) -> String {
    let count = secret.chars().count();
    let skip = count.saturating_sub(visible);
    format!("...{}", secret.chars().skip(skip).collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("kadapa"), "Kadapa");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éa"), "Éa");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("tourist attraction"), "Tourist Attraction");
        assert_eq!(title_case("hotel"), "Hotel");
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("AIzaSyC9TMHVE8z2Jf", 6), "...E8z2Jf");
        assert_eq!(mask_secret("abc", 6), "...abc");
    }
}
