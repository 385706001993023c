//! Address validation.

use crate::checkout::Address;

/// Validates that a shipping address is usable.
///
/// An address passes only when it is present and country, city, and street
/// are all non-empty. Whitespace is not trimmed, so a field of blanks counts
/// as filled in.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressValidator;

impl AddressValidator {
    /// Create a validator.
    pub fn new() -> Self {
        Self
    }

    /// Check whether the address can be shipped to.
    pub fn is_valid(&self, address: Option<&Address>) -> bool {
        match address {
            Some(addr) => {
                !addr.country.is_empty() && !addr.city.is_empty() && !addr.street.is_empty()
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_address_is_invalid() {
        let validator = AddressValidator::new();
        assert!(!validator.is_valid(None));
    }

    #[test]
    fn test_blank_field_is_invalid() {
        let validator = AddressValidator::new();
        let cases = [
            Address::new("", "Boston", "1 Main St"),
            Address::new("USA", "", "1 Main St"),
            Address::new("USA", "Boston", ""),
        ];
        for addr in &cases {
            assert!(!validator.is_valid(Some(addr)), "{:?}", addr);
        }
    }

    #[test]
    fn test_complete_address_is_valid() {
        let validator = AddressValidator::new();
        let addr = Address::new("USA", "Boston", "1 Main St");
        assert!(validator.is_valid(Some(&addr)));
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let validator = AddressValidator::new();
        let addr = Address::new(" ", "Boston", "1 Main St");
        assert!(validator.is_valid(Some(&addr)));
    }
}
