// ============================================================================
// VALIDACIÓN PREVIA - Antes de cualquier llamada de red
// ============================================================================
// Se recogen todos los problemas (no sólo el primero). La fecha se compara a
// nivel de día: hoy es válido, mañana no.
// ============================================================================

use chrono::NaiveDate;

use crate::error::ValidationIssue;
use crate::models::auth::Credentials;
use crate::models::product::{ProductForm, ProductPayload};

/// Resultado de validar el formulario: id (si es edición) + body listo para enviar
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedProduct {
    pub id: Option<i64>,
    pub payload: ProductPayload,
}

pub fn validate_product(
    form: &ProductForm,
    today: NaiveDate,
) -> Result<ValidatedProduct, Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    let id = match form.id.trim() {
        "" => None,
        raw => match raw.parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                issues.push(ValidationIssue::new("id", "Nieprawidłowe id produktu"));
                None
            }
        },
    };

    let nazwa = form.nazwa.trim();
    if nazwa.is_empty() {
        issues.push(ValidationIssue::new("nazwa", "Nazwa jest wymagana"));
    }

    let kategoria = form.kategoria.trim();
    if kategoria.is_empty() {
        issues.push(ValidationIssue::new("kategoria", "Kategoria jest wymagana"));
    }

    let cena = match form.cena.trim() {
        "" => {
            issues.push(ValidationIssue::new("cena", "Cena jest wymagana"));
            None
        }
        raw => match raw.parse::<f64>() {
            Ok(value) if !value.is_finite() => {
                issues.push(ValidationIssue::new("cena", "Cena musi być liczbą"));
                None
            }
            Ok(value) if value < 0.0 => {
                issues.push(ValidationIssue::new("cena", "Cena nie może być ujemna"));
                None
            }
            Ok(value) => Some(value),
            Err(_) => {
                issues.push(ValidationIssue::new("cena", "Cena musi być liczbą"));
                None
            }
        },
    };

    let ilosc = match form.ilosc.trim() {
        "" => {
            issues.push(ValidationIssue::new("ilosc", "Ilość jest wymagana"));
            None
        }
        raw => match raw.parse::<i64>() {
            Ok(value) if value < 0 => {
                issues.push(ValidationIssue::new("ilosc", "Ilość nie może być ujemna"));
                None
            }
            Ok(value) => Some(value),
            Err(_) => {
                issues.push(ValidationIssue::new("ilosc", "Ilość musi być liczbą całkowitą"));
                None
            }
        },
    };

    let data_dodania = match form.data_dodania.trim() {
        "" => None,
        raw => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) if date > today => {
                issues.push(ValidationIssue::new(
                    "data_dodania",
                    "Data nie może być późniejsza niż dziś",
                ));
                None
            }
            Ok(date) => Some(date),
            Err(_) => {
                issues.push(ValidationIssue::new(
                    "data_dodania",
                    "Nieprawidłowy format daty (RRRR-MM-DD)",
                ));
                None
            }
        },
    };

    if !issues.is_empty() {
        return Err(issues);
    }

    let producent = Some(form.producent.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string);

    match (cena, ilosc) {
        (Some(cena), Some(ilosc)) => Ok(ValidatedProduct {
            id,
            payload: ProductPayload {
                nazwa: nazwa.to_string(),
                cena,
                kategoria: kategoria.to_string(),
                ilosc,
                producent,
                data_dodania,
            },
        }),
        // Inalcanzable si issues está vacío, pero sin panic
        _ => Err(vec![ValidationIssue::new("cena", "Cena musi być liczbą")]),
    }
}

/// Login y contraseña obligatorios (equivalente a los `required` del form)
pub fn validate_credentials(credentials: &Credentials) -> Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();
    if credentials.login.trim().is_empty() {
        issues.push(ValidationIssue::new("login", "Login jest wymagany"));
    }
    if credentials.password.is_empty() {
        issues.push(ValidationIssue::new("password", "Hasło jest wymagane"));
    }
    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn valid_form() -> ProductForm {
        ProductForm {
            id: String::new(),
            nazwa: " Mleko ".to_string(),
            cena: "3.49".to_string(),
            kategoria: "Nabiał".to_string(),
            ilosc: "12".to_string(),
            producent: "  ".to_string(),
            data_dodania: "2024-06-15".to_string(),
        }
    }

    fn fields(issues: &[ValidationIssue]) -> Vec<&'static str> {
        issues.iter().map(|i| i.field).collect()
    }

    #[test]
    fn valid_form_becomes_payload() {
        let validated = validate_product(&valid_form(), today()).unwrap();
        assert_eq!(validated.id, None);
        assert_eq!(validated.payload.nazwa, "Mleko");
        assert_eq!(validated.payload.cena, 3.49);
        assert_eq!(validated.payload.ilosc, 12);
        assert_eq!(validated.payload.producent, None);
        assert_eq!(validated.payload.data_dodania, Some(today()));
    }

    #[test]
    fn edit_form_carries_id() {
        let form = ProductForm {
            id: "42".to_string(),
            ..valid_form()
        };
        assert_eq!(validate_product(&form, today()).unwrap().id, Some(42));
    }

    #[test]
    fn future_date_is_rejected_at_day_granularity() {
        let form = ProductForm {
            data_dodania: "2024-06-16".to_string(),
            ..valid_form()
        };
        let issues = validate_product(&form, today()).unwrap_err();
        assert_eq!(fields(&issues), vec!["data_dodania"]);
    }

    #[test]
    fn collects_every_issue() {
        let form = ProductForm {
            id: "abc".to_string(),
            nazwa: String::new(),
            cena: "-1".to_string(),
            kategoria: " ".to_string(),
            ilosc: "2.5".to_string(),
            producent: String::new(),
            data_dodania: "15/06/2024".to_string(),
        };
        let issues = validate_product(&form, today()).unwrap_err();
        assert_eq!(
            fields(&issues),
            vec!["id", "nazwa", "kategoria", "cena", "ilosc", "data_dodania"]
        );
    }

    #[test]
    fn non_numeric_and_non_finite_prices_fail() {
        for raw in ["abc", "NaN", "inf", ""] {
            let form = ProductForm {
                cena: raw.to_string(),
                ..valid_form()
            };
            let issues = validate_product(&form, today()).unwrap_err();
            assert_eq!(fields(&issues), vec!["cena"], "cena = {:?}", raw);
        }
    }

    #[test]
    fn zero_price_and_quantity_are_allowed() {
        let form = ProductForm {
            cena: "0".to_string(),
            ilosc: "0".to_string(),
            ..valid_form()
        };
        assert!(validate_product(&form, today()).is_ok());
    }

    #[test]
    fn credentials_require_both_fields() {
        assert!(validate_credentials(&Credentials::new("ania", "x")).is_ok());
        let issues = validate_credentials(&Credentials::new(" ", "")).unwrap_err();
        assert_eq!(fields(&issues), vec!["login", "password"]);
    }
}
