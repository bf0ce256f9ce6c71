//! Small display helpers

/// Title-cases a stored name for display ("sao jorge" -> "Sao Jorge").
/// Splits on spaces and underscores, collapsing runs of either.
pub fn to_title_case(input: &str) -> String {
    input
        .split([' ', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(to_title_case("obidos"), "Obidos");
        assert_eq!(to_title_case("sao jorge"), "Sao Jorge");
        assert_eq!(to_title_case("united kingdom"), "United Kingdom");
    }

    #[test]
    fn underscores_act_as_separators() {
        assert_eq!(to_title_case("trim_castle"), "Trim Castle");
    }

    #[test]
    fn normalizes_existing_casing() {
        assert_eq!(to_title_case("LEIRIA"), "Leiria");
        assert_eq!(to_title_case("mIxEd cAsE"), "Mixed Case");
    }

    #[test]
    fn collapses_separator_runs() {
        assert_eq!(to_title_case("  castelo  de   guimaraes "), "Castelo De Guimaraes");
        assert_eq!(to_title_case(""), "");
    }
}
