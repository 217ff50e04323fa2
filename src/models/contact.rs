//! Corporate contact value object
//!
//! A contact is derived from a `firstname.lastname@<organization>` email
//! address. The email must already have passed the schema layer's syntax
//! check; this module only applies the organizational rules.

use serde::Serialize;
use std::fmt;

use super::error::{ValidationErrorKind, ValidationResult};

/// Email domain every contact must belong to unless configured otherwise
pub const DEFAULT_ORGANIZATION_DOMAIN: &str = "acme.org";

/// A person of the organization responsible for a meeting
///
/// Fields are only reachable through accessors so a contact can never exist
/// without having passed [`CorporateContact::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CorporateContact {
    firstname: String,
    lastname: String,
    email: String,
}

impl CorporateContact {
    /// Parse a contact belonging to [`DEFAULT_ORGANIZATION_DOMAIN`]
    pub fn new(email: &str) -> ValidationResult<Self> {
        Self::parse(email, DEFAULT_ORGANIZATION_DOMAIN)
    }

    /// Parse a contact from its email address
    ///
    /// # Errors
    ///
    /// - `EmailDomain` if the part after the first `@` is not
    ///   `organization_domain`
    /// - `UsernameFormat` if the part before it is not exactly two
    ///   `.`-separated, non-empty names
    pub fn parse(email: &str, organization_domain: &str) -> ValidationResult<Self> {
        let (username, domain) = email.split_once('@').unwrap_or((email, ""));

        if domain != organization_domain {
            return Err(ValidationErrorKind::EmailDomain {
                expected: organization_domain.to_string(),
                found: domain.to_string(),
            }
            .into());
        }

        let names: Vec<&str> = username.split('.').collect();
        let (firstname, lastname) = match names.as_slice() {
            [firstname, lastname] if !firstname.is_empty() && !lastname.is_empty() => {
                (*firstname, *lastname)
            },
            _ => return Err(ValidationErrorKind::UsernameFormat(username.to_string()).into()),
        };

        Ok(Self {
            firstname: capitalize(firstname),
            lastname: lastname.to_uppercase(),
            email: email.to_string(),
        })
    }

    /// First name, capitalized
    pub fn firstname(&self) -> &str {
        &self.firstname
    }

    /// Last name, upper-cased
    pub fn lastname(&self) -> &str {
        &self.lastname
    }

    /// The email address exactly as supplied
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for CorporateContact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.firstname, self.lastname)
    }
}

/// Upper-case the first character and lower-case the rest
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_parsing() {
        let contact = CorporateContact::new("john.doe@acme.org").unwrap();
        assert_eq!(contact.firstname(), "John");
        assert_eq!(contact.lastname(), "DOE");
        assert_eq!(contact.email(), "john.doe@acme.org");
        assert_eq!(contact.to_string(), "John DOE");
    }

    #[test]
    fn test_firstname_capitalization() {
        let test_cases = vec![
            ("jOHN.doe@acme.org", "John"),
            ("JANE.smith@acme.org", "Jane"),
            ("élodie.martin@acme.org", "Élodie"),
        ];

        for (email, expected) in test_cases {
            let contact = CorporateContact::new(email).unwrap();
            assert_eq!(contact.firstname(), expected);
        }
    }

    #[test]
    fn test_foreign_domain_rejected() {
        let error = CorporateContact::new("firstname.lastname@gmail.com").unwrap_err();
        assert_eq!(
            error.message(),
            "Email domain must be 'acme.org', 'gmail.com' is not valid."
        );
    }

    #[test]
    fn test_subdomain_rejected() {
        let error = CorporateContact::new("john.doe@eu.acme.org").unwrap_err();
        assert_eq!(
            error.message(),
            "Email domain must be 'acme.org', 'eu.acme.org' is not valid."
        );
    }

    #[test]
    fn test_username_without_dot_rejected() {
        let error = CorporateContact::new("johndoe@acme.org").unwrap_err();
        assert_eq!(
            error.message(),
            "Username must be 'firstname.lastname', 'johndoe' is not valid."
        );
    }

    #[test]
    fn test_username_with_two_dots_rejected() {
        let error = CorporateContact::new("john.m.doe@acme.org").unwrap_err();
        assert_eq!(
            error.message(),
            "Username must be 'firstname.lastname', 'john.m.doe' is not valid."
        );
    }

    #[test]
    fn test_empty_name_part_rejected() {
        let test_cases = vec![
            ("john.@acme.org", "john."),
            (".doe@acme.org", ".doe"),
            (".@acme.org", "."),
        ];

        for (email, username) in test_cases {
            let error = CorporateContact::new(email).unwrap_err();
            assert_eq!(
                error.kind(),
                &ValidationErrorKind::UsernameFormat(username.to_string())
            );
        }
    }

    #[test]
    fn test_domain_checked_before_username() {
        let error = CorporateContact::new("johndoe@gmail.com").unwrap_err();
        assert!(matches!(
            error.kind(),
            ValidationErrorKind::EmailDomain { .. }
        ));
    }

    #[test]
    fn test_custom_organization_domain() {
        let contact = CorporateContact::parse("ada.lovelace@example.com", "example.com").unwrap();
        assert_eq!(contact.firstname(), "Ada");
        assert_eq!(contact.lastname(), "LOVELACE");

        let error = CorporateContact::parse("ada.lovelace@acme.org", "example.com").unwrap_err();
        assert_eq!(
            error.message(),
            "Email domain must be 'example.com', 'acme.org' is not valid."
        );
    }
}
