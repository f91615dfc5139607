//! Fixture generators for unit tests
//!
//! Generators build resources from a name plus a list of modifiers. A
//! modifier is a boxed closure that changes one thing about the resource;
//! modifiers run left to right, so later ones override earlier ones.
//!
//! ```
//! use certgen::crd::{CaIssuer, ConditionStatus, IssuerCondition};
//! use certgen::fixture::{add_issuer_condition, issuer, set_issuer_ca};
//!
//! let iss = issuer(
//!     "ca-issuer",
//!     vec![
//!         set_issuer_ca(CaIssuer { secret_name: "ca-key-pair".into() }),
//!         add_issuer_condition(IssuerCondition::ready(ConditionStatus::True, "KeyPairVerified", "")),
//!     ],
//! );
//! assert!(iss.is_ready());
//! ```

mod issuer;

pub use issuer::{
    add_issuer_condition, issuer, issuer_from, set_issuer_acme, set_issuer_acme_uri,
    set_issuer_ca, set_issuer_namespace, set_issuer_self_signed, IssuerModifier,
};

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

/// Metadata for a generated fixture: the given name in the default test namespace
pub fn object_meta(name: impl Into<String>) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.into()),
        namespace: Some(crate::DEFAULT_TEST_NAMESPACE.to_string()),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_meta_uses_test_namespace() {
        let meta = object_meta("issuer-1");
        assert_eq!(meta.name.as_deref(), Some("issuer-1"));
        assert_eq!(meta.namespace.as_deref(), Some(crate::DEFAULT_TEST_NAMESPACE));
        assert!(meta.labels.is_none());
        assert!(meta.uid.is_none());
    }

    #[test]
    fn object_meta_accepts_empty_name() {
        assert_eq!(object_meta("").name.as_deref(), Some(""));
    }
}
