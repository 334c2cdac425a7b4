use clinica_core::models::Specialty;
use clinica_core::normalize::{normalize_cep, normalize_specialty};
use clinica_core::validation::FieldError;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("Ginecologia", "GINECOLOGIA")]
#[case("GINECOLOGIA", "GINECOLOGIA")]
#[case("Clínica Geral", "CLINICA_GERAL")]
#[case("  clinica   geral ", "CLINICA_GERAL")]
#[case("Oftalmológia", "OFTALMOLOGIA")]
fn test_specialty_normalization(#[case] input: &str, #[case] expected: &str) {
    let once = normalize_specialty(input);

    assert_eq!(once, expected);
    assert_eq!(normalize_specialty(&once), once);
}

#[test]
fn test_specialty_parsing() {
    assert_eq!("Clínica Geral".parse::<Specialty>(), Ok(Specialty::ClinicaGeral));
    assert_eq!("ortopedia".parse::<Specialty>(), Ok(Specialty::Ortopedia));
    assert_eq!("Astrologia".parse::<Specialty>(), Err(FieldError::UnknownSpecialty));

    for specialty in Specialty::ALL {
        assert_eq!(specialty.as_str().parse::<Specialty>(), Ok(specialty));
    }
}

#[rstest]
#[case("12345-678", "12345678")]
#[case("12.345-678", "12345678")]
#[case("12345678", "12345678")]
fn test_cep_is_stripped_to_digits(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize_cep(input), Ok(expected.to_string()));
}

#[rstest]
#[case("1234-567")]
#[case("")]
#[case("123456789")]
#[case("abcdefgh")]
fn test_cep_with_wrong_digit_count(#[case] input: &str) {
    assert_eq!(normalize_cep(input), Err(FieldError::InvalidCep));
}
