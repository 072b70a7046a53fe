/// Legend label for a player: first initial plus last name ("J.Kowalski").
/// Middle names are skipped; a single-token name is returned as is.
pub fn abbreviate_name(name: &str) -> String {
    let tokens: Vec<&str> = name.split_whitespace().collect();
    if tokens.len() < 2 {
        return name.to_string();
    }

    let last = tokens[tokens.len() - 1];
    tokens[0]
        .chars()
        .next()
        .map(|initial| format!("{}.{}", initial, last))
        .unwrap_or_else(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_tokens() {
        assert_eq!(abbreviate_name("Jan Kowalski"), "J.Kowalski");
        assert_eq!(abbreviate_name("Łukasz Żak"), "Ł.Żak");
    }

    #[test]
    fn test_middle_name_skipped() {
        assert_eq!(abbreviate_name("Jan Maria Rokita"), "J.Rokita");
    }

    #[test]
    fn test_non_standard_names_fall_back() {
        assert_eq!(abbreviate_name("Giba"), "Giba");
        assert_eq!(abbreviate_name(""), "");
    }
}
