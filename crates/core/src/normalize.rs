use unidecode::unidecode;

use crate::validation::FieldError;

/// Number of digits in a Brazilian postal code.
pub const CEP_DIGITS: usize = 8;

/// Turns a specialty label into its enum spelling.
///
/// Diacritics are stripped, letters uppercased and whitespace runs joined
/// with `_`, so `"Clínica Geral"` becomes `"CLINICA_GERAL"`. Applying it to
/// an already normalized value returns the value unchanged.
pub fn normalize_specialty(input: &str) -> String {
    unidecode(input)
        .split_whitespace()
        .map(str::to_uppercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Strips every non-digit from a CEP and checks that exactly eight remain.
pub fn normalize_cep(input: &str) -> Result<String, FieldError> {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();

    if digits.len() == CEP_DIGITS {
        Ok(digits)
    } else {
        Err(FieldError::InvalidCep)
    }
}
