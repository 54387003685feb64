/// Country record model
///
/// Records are consumed exactly as the listing endpoint returns them. There is
/// no schema validation: a field that is missing, `null` or of the wrong JSON
/// type decodes to an empty value so it shows up as a gap in the table
/// instead of failing the whole response.
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// One country as returned by the listing endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Country {
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub code: String,
    #[serde(deserialize_with = "lenient")]
    pub capital: String,
    #[serde(deserialize_with = "lenient")]
    pub region: String,
    #[serde(deserialize_with = "lenient")]
    pub currency: Currency,
    #[serde(deserialize_with = "lenient")]
    pub language: Language,
    #[serde(deserialize_with = "lenient")]
    pub flag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Currency {
    #[serde(deserialize_with = "lenient")]
    pub code: String,
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Language {
    #[serde(deserialize_with = "lenient")]
    pub code: String,
    #[serde(deserialize_with = "lenient")]
    pub name: String,
}

impl Currency {
    /// Table label: "name (symbol)", with nothing between the parentheses when
    /// the record carries no symbol
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.symbol.as_deref().unwrap_or(""))
    }
}

/// Decode any JSON value into `T`, falling back to `T::default()` when the
/// value has the wrong shape
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_record() {
        let json = r#"{
            "name": "France",
            "code": "FR",
            "capital": "Paris",
            "region": "EU",
            "currency": { "code": "EUR", "name": "Euro", "symbol": "€" },
            "language": { "code": "fr", "name": "French" },
            "flag": "https://restcountries.eu/data/fra.svg"
        }"#;

        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.name, "France");
        assert_eq!(country.capital, "Paris");
        assert_eq!(country.currency.symbol.as_deref(), Some("€"));
        assert_eq!(country.language.name, "French");
        assert_eq!(country.currency.label(), "Euro (€)");
    }

    #[test]
    fn test_missing_fields_become_gaps() {
        let country: Country = serde_json::from_str(r#"{ "name": "Atlantis" }"#).unwrap();
        assert_eq!(country.name, "Atlantis");
        assert_eq!(country.capital, "");
        assert_eq!(country.currency, Currency::default());
        assert_eq!(country.currency.label(), " ()");
    }

    #[test]
    fn test_wrong_types_become_gaps() {
        let json = r#"{
            "name": "Bouvet Island",
            "capital": null,
            "code": 74,
            "currency": "NOK",
            "language": { "code": "no", "name": ["Norwegian"] }
        }"#;

        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.name, "Bouvet Island");
        assert_eq!(country.capital, "");
        assert_eq!(country.code, "");
        assert_eq!(country.currency, Currency::default());
        assert_eq!(country.language.code, "no");
        assert_eq!(country.language.name, "");
    }

    #[test]
    fn test_null_symbol_is_absent() {
        let json = r#"{ "code": "XDR", "name": "Special drawing rights", "symbol": null }"#;
        let currency: Currency = serde_json::from_str(json).unwrap();
        assert_eq!(currency.symbol, None);
        assert_eq!(currency.label(), "Special drawing rights ()");
    }
}
