use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{CurrencyError, PatchError};
use crate::schema::{FieldType, Object, ObjectKind, Schema};

use super::PatchOptions;

pub const CURRENCIES_OBJECT: &str = "Currencies";

/// Telegram Stars, the platform's internal currency. Not part of the upstream list.
pub const STARS_CURRENCY: &str = "XTR";

const CURRENCIES_LINK: &str = "https://core.telegram.org/bots/payments#supported-currencies";

/// Add `Currencies`, a closed union of every supported currency code.
pub fn apply(schema: &mut Schema, options: &PatchOptions) -> Result<(), PatchError> {
    if options.currencies.is_empty() {
        return Err(PatchError::NoCurrencies);
    }

    let mut codes: Vec<&str> = options.currencies.iter().map(String::as_str).collect();
    if !codes.contains(&STARS_CURRENCY) {
        codes.push(STARS_CURRENCY);
    }

    let object = Object::new(
        CURRENCIES_OBJECT,
        ObjectKind::AnyOf {
            any_of: codes.into_iter().map(FieldType::string_literal).collect(),
        },
    )
    .with_description("Three-letter ISO 4217 currency codes supported by Telegram payments, plus XTR for Telegram Stars.")
    .with_documentation_link(CURRENCIES_LINK);

    schema.upsert_object(object);
    Ok(())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CurrencyDocument {
    Codes(Vec<String>),
    Keyed(IndexMap<String, serde_json::Value>),
}

/// Read currency codes from either `["USD", ...]` or `{"USD": {...}, ...}`, keeping document order.
pub fn parse_currency_list(input: &str) -> Result<Vec<String>, CurrencyError> {
    let document: CurrencyDocument = serde_json::from_str(input).map_err(|e| {
        if e.is_data() {
            CurrencyError::UnsupportedShape
        } else {
            CurrencyError::Json(e)
        }
    })?;

    Ok(match document {
        CurrencyDocument::Codes(codes) => codes,
        CurrencyDocument::Keyed(map) => map.into_keys().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ReleaseDate, Version};

    fn schema() -> Schema {
        Schema {
            version: Version {
                major: 7,
                minor: 10,
                patch: 0,
            },
            recent_changes: ReleaseDate {
                year: 2024,
                month: 9,
                day: 6,
            },
            methods: vec![],
            objects: vec![],
        }
    }

    fn literals(schema: &Schema) -> Vec<String> {
        match &schema.object(CURRENCIES_OBJECT).unwrap().kind {
            ObjectKind::AnyOf { any_of } => any_of
                .iter()
                .map(|v| match v {
                    FieldType::String {
                        default: Some(code),
                        ..
                    } => code.clone(),
                    other => panic!("unexpected variant {other:?}"),
                })
                .collect(),
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_appends_stars_sentinel() {
        let mut schema = schema();
        let options = PatchOptions {
            currencies: vec!["USD".into(), "EUR".into()],
        };
        apply(&mut schema, &options).unwrap();
        assert_eq!(literals(&schema), ["USD", "EUR", "XTR"]);
    }

    #[test]
    fn test_sentinel_not_duplicated() {
        let mut schema = schema();
        let options = PatchOptions {
            currencies: vec!["XTR".into(), "USD".into()],
        };
        apply(&mut schema, &options).unwrap();
        assert_eq!(literals(&schema), ["XTR", "USD"]);
    }

    #[test]
    fn test_empty_list_is_fatal() {
        let mut schema = schema();
        let err = apply(&mut schema, &PatchOptions::default()).unwrap_err();
        assert!(matches!(err, PatchError::NoCurrencies));
        assert!(schema.objects.is_empty());
    }

    #[test]
    fn test_parse_array_document() {
        let codes = parse_currency_list(r#"["USD", "EUR", "AED"]"#).unwrap();
        assert_eq!(codes, ["USD", "EUR", "AED"]);
    }

    #[test]
    fn test_parse_keyed_document_keeps_order() {
        let json = r#"{
            "USD": {"code": "USD", "title": "United States Dollar"},
            "AED": {"code": "AED", "title": "United Arab Emirates Dirham"},
            "EUR": {"code": "EUR", "title": "Euro"}
        }"#;
        let codes = parse_currency_list(json).unwrap();
        assert_eq!(codes, ["USD", "AED", "EUR"]);
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(matches!(
            parse_currency_list("42").unwrap_err(),
            CurrencyError::UnsupportedShape
        ));
        assert!(matches!(
            parse_currency_list("[1, 2").unwrap_err(),
            CurrencyError::Json(_)
        ));
    }
}
