//! Issuer fixture generators

use tracing::trace;

use super::object_meta;
use crate::crd::{
    AcmeIssuer, AcmeIssuerStatus, CaIssuer, Issuer, IssuerCondition, IssuerSpec, SelfSignedIssuer,
};

/// A single change applied to an Issuer fixture
pub type IssuerModifier = Box<dyn FnOnce(&mut Issuer)>;

/// Build a new Issuer with the given name, then apply `mods` in order
///
/// The Issuer starts with no backend configured and no status.
pub fn issuer(name: impl Into<String>, mods: impl IntoIterator<Item = IssuerModifier>) -> Issuer {
    let mut iss = Issuer {
        metadata: object_meta(name),
        spec: IssuerSpec::default(),
        status: None,
    };
    apply(&mut iss, mods);
    iss
}

/// Apply `mods` in order to an existing Issuer and hand the same Issuer back
pub fn issuer_from(
    iss: &mut Issuer,
    mods: impl IntoIterator<Item = IssuerModifier>,
) -> &mut Issuer {
    apply(iss, mods);
    iss
}

fn apply(iss: &mut Issuer, mods: impl IntoIterator<Item = IssuerModifier>) {
    let mut applied = 0usize;
    for modify in mods {
        modify(&mut *iss);
        applied += 1;
    }
    trace!(
        issuer = iss.metadata.name.as_deref().unwrap_or_default(),
        applied,
        "applied issuer modifiers"
    );
}

/// Set the Issuer's ACME backend
///
/// Only the ACME slot is written; CA and self-signed slots keep their values.
pub fn set_issuer_acme(acme: AcmeIssuer) -> IssuerModifier {
    Box::new(move |iss: &mut Issuer| iss.spec.acme = Some(acme))
}

/// Set the Issuer's CA backend, leaving the other backend slots untouched
pub fn set_issuer_ca(ca: CaIssuer) -> IssuerModifier {
    Box::new(move |iss: &mut Issuer| iss.spec.ca = Some(ca))
}

/// Set the Issuer's self-signed backend, leaving the other backend slots untouched
pub fn set_issuer_self_signed(self_signed: SelfSignedIssuer) -> IssuerModifier {
    Box::new(move |iss: &mut Issuer| iss.spec.self_signed = Some(self_signed))
}

/// Append a condition to the Issuer's status
///
/// Existing conditions are kept as-is; no deduplication by type.
pub fn add_issuer_condition(condition: IssuerCondition) -> IssuerModifier {
    Box::new(move |iss: &mut Issuer| {
        iss.status
            .get_or_insert_with(Default::default)
            .conditions
            .push(condition)
    })
}

/// Move the Issuer into another namespace
pub fn set_issuer_namespace(namespace: impl Into<String>) -> IssuerModifier {
    let namespace = namespace.into();
    Box::new(move |iss: &mut Issuer| iss.metadata.namespace = Some(namespace))
}

/// Record the registered ACME account URI in the Issuer's status
pub fn set_issuer_acme_uri(uri: impl Into<String>) -> IssuerModifier {
    let uri = uri.into();
    Box::new(move |iss: &mut Issuer| {
        iss.status.get_or_insert_with(Default::default).acme = Some(AcmeIssuerStatus { uri })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::{ConditionStatus, IssuerKind, SecretKeySelector};

    fn staging_acme() -> AcmeIssuer {
        AcmeIssuer {
            email: "ops@example.com".to_string(),
            server: crate::LETSENCRYPT_STAGING_URL.to_string(),
            private_key_secret_ref: SecretKeySelector::new("letsencrypt-staging"),
            ..Default::default()
        }
    }

    #[test]
    fn issuer_without_modifiers_is_bare() {
        let iss = issuer("issuer-1", vec![]);
        assert_eq!(iss.metadata.name.as_deref(), Some("issuer-1"));
        assert_eq!(iss.spec, IssuerSpec::default());
        assert!(iss.status.is_none());
    }

    #[test]
    fn issuer_applies_modifiers_in_order() {
        let iss = issuer(
            "ordered",
            vec![
                set_issuer_namespace("first"),
                set_issuer_namespace("second"),
            ],
        );
        assert_eq!(iss.metadata.namespace.as_deref(), Some("second"));
    }

    #[test]
    fn backend_setters_fill_independent_slots() {
        let iss = issuer(
            "two-backends",
            vec![
                set_issuer_acme(staging_acme()),
                set_issuer_self_signed(SelfSignedIssuer {}),
            ],
        );
        assert_eq!(iss.spec.acme, Some(staging_acme()));
        assert_eq!(iss.spec.self_signed, Some(SelfSignedIssuer {}));
        assert!(iss.spec.ca.is_none());
        assert_eq!(iss.spec.kind(), None);
        assert!(iss.spec.validate().is_err());
    }

    #[test]
    fn resetting_a_backend_replaces_only_that_slot() {
        let mut replacement = staging_acme();
        replacement.email = "security@example.com".to_string();

        let iss = issuer(
            "reset",
            vec![
                set_issuer_ca(CaIssuer::default()),
                set_issuer_acme(staging_acme()),
                set_issuer_acme(replacement.clone()),
            ],
        );
        assert_eq!(iss.spec.acme, Some(replacement));
        assert_eq!(iss.spec.ca, Some(CaIssuer::default()));
        assert_eq!(
            iss.spec.configured_kinds(),
            vec![IssuerKind::Acme, IssuerKind::Ca]
        );
    }

    #[test]
    fn acme_uri_creates_status() {
        let iss = issuer(
            "registered",
            vec![set_issuer_acme_uri("https://acme.example/acct/1")],
        );
        let status = iss.status.expect("status created");
        assert_eq!(status.acme.unwrap().uri, "https://acme.example/acct/1");
        assert!(status.conditions.is_empty());
    }

    #[test]
    fn condition_and_acme_uri_share_status() {
        let iss = issuer(
            "shared",
            vec![
                add_issuer_condition(IssuerCondition::ready(ConditionStatus::True, "Registered", "")),
                set_issuer_acme_uri("https://acme.example/acct/2"),
            ],
        );
        let status = iss.status.expect("status created");
        assert_eq!(status.conditions.len(), 1);
        assert!(status.acme.is_some());
    }

    #[test]
    fn issuer_from_without_modifiers_leaves_issuer_untouched() {
        let mut iss = issuer("stable", vec![set_issuer_ca(CaIssuer::default())]);
        let before = iss.clone();
        issuer_from(&mut iss, vec![]);
        assert_eq!(iss, before);
    }
}
