use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Vendor identifier, assigned by the store on creation.
pub type VendorId = i64;

/// Vendor classification: supplier or partner.
///
/// The wire format is the exact strings `"Supplier"` / `"Partner"`, so the
/// variant names double as the serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartnerType {
    Supplier,
    Partner,
}

impl PartnerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartnerType::Supplier => "Supplier",
            PartnerType::Partner => "Partner",
        }
    }
}

impl core::fmt::Display for PartnerType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for PartnerType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Supplier" => Ok(PartnerType::Supplier),
            "Partner" => Ok(PartnerType::Partner),
            other => Err(DomainError::validation(format!(
                "unknown partner type: {other}"
            ))),
        }
    }
}

/// A persisted vendor row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub partner_type: PartnerType,
}

/// A candidate vendor record, validated but not yet persisted.
///
/// Construction goes through [`NewVendor::new`], so holding a value means the
/// required fields are present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVendor {
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub partner_type: PartnerType,
}

impl NewVendor {
    pub fn new(
        name: impl Into<String>,
        contact_person: impl Into<String>,
        email: impl Into<String>,
        partner_type: PartnerType,
    ) -> DomainResult<Self> {
        let name = name.into();
        let contact_person = contact_person.into();
        let email = email.into();

        if name.trim().is_empty() || contact_person.trim().is_empty() || email.trim().is_empty() {
            return Err(DomainError::validation("all fields are required"));
        }

        Ok(Self {
            name,
            contact_person,
            email,
            partner_type,
        })
    }

    /// The persisted vendor this candidate becomes once the store assigns an id.
    pub fn with_id(self, id: VendorId) -> Vendor {
        Vendor {
            id,
            name: self.name,
            contact_person: self.contact_person,
            email: self.email,
            partner_type: self.partner_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_vendor_accepts_complete_record() {
        let candidate = NewVendor::new("Acme", "Jo", "jo@acme.com", PartnerType::Supplier).unwrap();
        assert_eq!(candidate.name, "Acme");
        assert_eq!(candidate.partner_type, PartnerType::Supplier);
    }

    #[test]
    fn new_vendor_rejects_empty_fields() {
        for (name, contact, email) in [
            ("", "Jo", "jo@acme.com"),
            ("Acme", "", "jo@acme.com"),
            ("Acme", "Jo", ""),
            ("   ", "Jo", "jo@acme.com"),
        ] {
            let err = NewVendor::new(name, contact, email, PartnerType::Partner).unwrap_err();
            match err {
                DomainError::Validation(_) => {}
                other => panic!("expected Validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn with_id_preserves_fields() {
        let vendor = NewVendor::new("Acme", "Jo", "jo@acme.com", PartnerType::Partner)
            .unwrap()
            .with_id(7);
        assert_eq!(vendor.id, 7);
        assert_eq!(vendor.email, "jo@acme.com");
        assert_eq!(vendor.partner_type, PartnerType::Partner);
    }

    #[test]
    fn partner_type_round_trips_through_str() {
        for kind in [PartnerType::Supplier, PartnerType::Partner] {
            assert_eq!(kind.as_str().parse::<PartnerType>().unwrap(), kind);
        }
    }

    #[test]
    fn partner_type_rejects_unknown_values() {
        for s in ["supplier", "PARTNER", "Vendor", ""] {
            assert!(s.parse::<PartnerType>().is_err(), "accepted {s:?}");
        }
    }

    #[test]
    fn partner_type_serializes_to_wire_strings() {
        assert_eq!(
            serde_json::to_value(PartnerType::Supplier).unwrap(),
            serde_json::json!("Supplier")
        );
        assert_eq!(
            serde_json::from_value::<PartnerType>(serde_json::json!("Partner")).unwrap(),
            PartnerType::Partner
        );
    }

    proptest! {
        #[test]
        fn non_blank_fields_always_validate(
            name in "[a-zA-Z0-9 ]{1,40}[a-zA-Z0-9]",
            contact in "[a-zA-Z ]{1,30}[a-zA-Z]",
            email in "[a-z]{1,10}@[a-z]{1,10}\\.[a-z]{2,3}",
        ) {
            let candidate = NewVendor::new(&name, &contact, &email, PartnerType::Supplier);
            prop_assert!(candidate.is_ok());
        }

        #[test]
        fn partner_type_never_parses_from_other_strings(s in "[a-z]{0,12}") {
            prop_assume!(s != "Supplier" && s != "Partner");
            prop_assert!(s.parse::<PartnerType>().is_err());
        }
    }
}
