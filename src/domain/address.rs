use serde::Serialize;

/// Longest street line the gateway accepts.
pub const MAX_STREET_LENGTH: usize = 69;

/// Number placeholder used when an address has no recognisable house number.
pub const NO_NUMBER: &str = "s/nº";

const SEPARATORS: [char; 3] = ['-', ',', '\n'];

/// Street address broken into the components the gateway asks for.
#[derive(Debug, Serialize, PartialEq, Clone, Default)]
pub struct StreetAddress {
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub district: Option<String>,
}

impl StreetAddress {
    /// Resolves the components of an address from its street lines.
    ///
    /// An address captured as several lines is already split: line 1 is the
    /// street, then number, complement and district. Each non-empty line wins.
    /// Missing or blank lines, and single-line addresses, are derived by
    /// splitting the combined street string with [`split_street`].
    pub fn from_lines(lines: &[String]) -> Self {
        let derived = split_street(&lines.join("\n"));
        if lines.len() <= 1 {
            return derived;
        }

        let line = |index: usize| {
            lines
                .get(index)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        Self {
            street: line(0)
                .map(|street| truncate_chars(&street, MAX_STREET_LENGTH))
                .or(derived.street),
            number: line(1).or(derived.number),
            complement: line(2).or(derived.complement),
            district: line(3).or(derived.district),
        }
    }
}

/// Splits a free-form street string into street, number, complement and district.
///
/// The string is cut on `-`, `,` and line breaks:
/// - four parts map to street, number, complement, district;
/// - three parts map to street, number, complement;
/// - one or two parts are scanned for the first digit, which starts the number;
/// - anything longer is kept whole as the street with no number.
pub fn split_street(full_address: &str) -> StreetAddress {
    let parts: Vec<&str> = full_address.split(SEPARATORS).collect();

    let (street, number, complement, district) = match parts.as_slice() {
        [street, number, complement, district] => (*street, *number, *complement, *district),
        [street, number, complement] => (*street, *number, *complement, ""),
        [_] | [_, _] => {
            let (street, number, complement) = sort_components(full_address, &parts);
            return StreetAddress {
                street: non_empty(street).map(|s| truncate_chars(&s, MAX_STREET_LENGTH)),
                number: non_empty(number),
                complement: non_empty(complement),
                district: None,
            };
        }
        _ => (full_address, NO_NUMBER, "", ""),
    };

    StreetAddress {
        street: non_empty(street).map(|s| truncate_chars(&s, MAX_STREET_LENGTH)),
        number: non_empty(number),
        complement: non_empty(complement),
        district: non_empty(district),
    }
}

/// Finds the house number in an address with at most one separator.
fn sort_components<'a>(text: &'a str, parts: &[&'a str]) -> (&'a str, &'a str, &'a str) {
    if let &[first, second] = parts
        && let Some(index) = first.find(|c: char| c.is_ascii_digit())
    {
        return (&first[..index], &first[index..], second);
    }

    match text.find(|c: char| c.is_ascii_digit()) {
        Some(index) => (&text[..index], &text[index..], ""),
        None => (text, "", ""),
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|c: char| SEPARATORS.contains(&c) || c.is_whitespace())
        .to_string();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Keeps at most `max` characters of `value`.
pub fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

/// Strips everything but digits from a postal code.
pub fn fix_postal_code(postal_code: &str) -> String {
    postal_code.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_split_four_parts() {
        let address = split_street("Rua das Flores, 123, Apto 4 - Centro");
        assert_eq!(address.street.as_deref(), Some("Rua das Flores"));
        assert_eq!(address.number.as_deref(), Some("123"));
        assert_eq!(address.complement.as_deref(), Some("Apto 4"));
        assert_eq!(address.district.as_deref(), Some("Centro"));
    }

    #[test]
    fn test_split_three_parts() {
        let address = split_street("Av. Paulista, 1578, Conj. 12");
        assert_eq!(address.street.as_deref(), Some("Av. Paulista"));
        assert_eq!(address.number.as_deref(), Some("1578"));
        assert_eq!(address.complement.as_deref(), Some("Conj. 12"));
        assert_eq!(address.district, None);
    }

    #[test]
    fn test_split_single_part_finds_number() {
        let address = split_street("Rua Augusta 500");
        assert_eq!(address.street.as_deref(), Some("Rua Augusta"));
        assert_eq!(address.number.as_deref(), Some("500"));
        assert_eq!(address.complement, None);
    }

    #[test]
    fn test_split_two_parts_number_in_first() {
        let address = split_street("Rua Augusta 500, fundos");
        assert_eq!(address.street.as_deref(), Some("Rua Augusta"));
        assert_eq!(address.number.as_deref(), Some("500"));
        assert_eq!(address.complement.as_deref(), Some("fundos"));
    }

    #[test]
    fn test_split_two_parts_number_after_separator() {
        let address = split_street("Rua Augusta, 500");
        assert_eq!(address.street.as_deref(), Some("Rua Augusta"));
        assert_eq!(address.number.as_deref(), Some("500"));
    }

    #[test]
    fn test_split_without_number() {
        let address = split_street("Travessa sem nome");
        assert_eq!(address.street.as_deref(), Some("Travessa sem nome"));
        assert_eq!(address.number, None);
    }

    #[test]
    fn test_split_too_many_parts_keeps_whole_street() {
        let address = split_street("A, B, C, D, E");
        assert_eq!(address.street.as_deref(), Some("A, B, C, D, E"));
        assert_eq!(address.number.as_deref(), Some(NO_NUMBER));
    }

    #[test]
    fn test_street_truncated_to_gateway_limit() {
        let long = format!("Rua {}", "x".repeat(100));
        let address = split_street(&long);
        assert_eq!(address.street.unwrap().chars().count(), MAX_STREET_LENGTH);
    }

    #[test]
    fn test_from_lines_prefers_pre_split_components() {
        // Hyphenated street names would be cut by the splitter; the lines win.
        let address = StreetAddress::from_lines(&lines(&[
            "Rua Sete-de-Setembro",
            "45",
            "Loja 2",
            "Centro",
        ]));
        assert_eq!(address.street.as_deref(), Some("Rua Sete-de-Setembro"));
        assert_eq!(address.number.as_deref(), Some("45"));
        assert_eq!(address.complement.as_deref(), Some("Loja 2"));
        assert_eq!(address.district.as_deref(), Some("Centro"));
    }

    #[test]
    fn test_from_lines_derives_blank_components() {
        let address =
            StreetAddress::from_lines(&lines(&["Rua Augusta", "500", "", "Consolação"]));
        assert_eq!(address.street.as_deref(), Some("Rua Augusta"));
        assert_eq!(address.number.as_deref(), Some("500"));
        // The blank complement line falls back to the split of the raw street.
        assert_eq!(address.complement, None);
        assert_eq!(address.district.as_deref(), Some("Consolação"));
    }

    #[test]
    fn test_from_lines_blank_number_is_rederived() {
        let address = StreetAddress::from_lines(&lines(&["Rua Augusta 500", " "]));
        assert_eq!(address.street.as_deref(), Some("Rua Augusta 500"));
        assert_eq!(address.number.as_deref(), Some("500"));
    }

    #[test]
    fn test_from_single_line_uses_split() {
        let address = StreetAddress::from_lines(&lines(&["Rua Augusta, 500, Apto 3 - Centro"]));
        assert_eq!(address, split_street("Rua Augusta, 500, Apto 3 - Centro"));
    }

    #[test]
    fn test_fix_postal_code() {
        assert_eq!(fix_postal_code("01310-100"), "01310100");
        assert_eq!(fix_postal_code(" 01.310 100 "), "01310100");
    }
}
