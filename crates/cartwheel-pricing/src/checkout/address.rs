//! Address types.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize `null` as an empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.unwrap_or_default())
}

/// A shipping address.
///
/// Fields a feed omits or nulls deserialize as empty strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    /// Country name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub country: String,
    /// City name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub city: String,
    /// Street line.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub street: String,
}

impl Address {
    /// Create a new address.
    pub fn new(
        country: impl Into<String>,
        city: impl Into<String>,
        street: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            city: city.into(),
            street: street.into(),
        }
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        format!("{}, {}, {}", self.street, self.city, self.country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_creation() {
        let addr = Address::new("USA", "San Francisco", "123 Main St");
        assert_eq!(addr.country, "USA");
        assert_eq!(addr.city, "San Francisco");
        assert_eq!(addr.street, "123 Main St");
    }

    #[test]
    fn test_address_one_line() {
        let addr = Address::new("USA", "San Francisco", "123 Main St");
        assert_eq!(addr.one_line(), "123 Main St, San Francisco, USA");
    }

    #[test]
    fn test_null_and_missing_fields_deserialize_as_empty() {
        let addr: Address =
            serde_json::from_str(r#"{"country": null, "city": "Berlin"}"#).unwrap();
        assert_eq!(addr.country, "");
        assert_eq!(addr.city, "Berlin");
        assert_eq!(addr.street, "");
    }
}
