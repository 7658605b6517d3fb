/// Brazilian federative units and their two-letter abbreviations.
const STATES: [(&str, &str); 27] = [
    ("AC", "Acre"),
    ("AL", "Alagoas"),
    ("AP", "Amapá"),
    ("AM", "Amazonas"),
    ("BA", "Bahia"),
    ("CE", "Ceará"),
    ("DF", "Distrito Federal"),
    ("ES", "Espírito Santo"),
    ("GO", "Goiás"),
    ("MA", "Maranhão"),
    ("MT", "Mato Grosso"),
    ("MS", "Mato Grosso do Sul"),
    ("MG", "Minas Gerais"),
    ("PA", "Pará"),
    ("PB", "Paraíba"),
    ("PR", "Paraná"),
    ("PE", "Pernambuco"),
    ("PI", "Piauí"),
    ("RJ", "Rio de Janeiro"),
    ("RN", "Rio Grande do Norte"),
    ("RS", "Rio Grande do Sul"),
    ("RO", "Rondônia"),
    ("RR", "Roraima"),
    ("SC", "Santa Catarina"),
    ("SP", "São Paulo"),
    ("SE", "Sergipe"),
    ("TO", "Tocantins"),
];

/// Returns the abbreviation of a Brazilian state name, or the input unchanged.
///
/// Matching ignores case, surrounding whitespace and Portuguese accents, so
/// "sao paulo" and "SÃO PAULO" both yield "SP".
pub fn abbreviation(region_name: &str) -> &str {
    let wanted = fold(region_name);
    STATES
        .iter()
        .find(|(_, name)| fold(name) == wanted)
        .map_or(region_name, |&(code, _)| code)
}

fn fold(value: &str) -> String {
    value
        .trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_state_is_abbreviated() {
        assert_eq!(abbreviation("São Paulo"), "SP");
        assert_eq!(abbreviation("Rio Grande do Sul"), "RS");
    }

    #[test]
    fn test_matching_ignores_case_and_accents() {
        assert_eq!(abbreviation("sao paulo"), "SP");
        assert_eq!(abbreviation("  ESPIRITO SANTO "), "ES");
        assert_eq!(abbreviation("ceara"), "CE");
    }

    #[test]
    fn test_unknown_region_passes_through() {
        assert_eq!(abbreviation("Lisboa"), "Lisboa");
        assert_eq!(abbreviation(""), "");
    }

    #[test]
    fn test_abbreviation_is_idempotent() {
        for (code, name) in STATES {
            let once = abbreviation(name).to_string();
            assert_eq!(once, code);
            assert_eq!(abbreviation(&once), once);
        }
    }
}
