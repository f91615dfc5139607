//! Issuer Custom Resource Definition
//!
//! An Issuer represents a certificate-issuing authority scoped to a single
//! namespace. Each backend has its own slot in the spec; a valid Issuer
//! fills exactly one of them.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::types::{
    AcmeIssuer, AcmeIssuerStatus, CaIssuer, ConditionStatus, IssuerCondition,
    IssuerConditionType, IssuerKind, SelfSignedIssuer,
};

/// Specification for an Issuer
///
/// Example:
/// ```yaml
/// apiVersion: certmanager.k8s.io/v1alpha1
/// kind: Issuer
/// metadata:
///   name: letsencrypt-staging
///   namespace: default
/// spec:
///   acme:
///     server: https://acme-staging-v02.api.letsencrypt.org/directory
///     email: ops@example.com
///     privateKeySecretRef:
///       name: letsencrypt-staging
/// ```
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[kube(
    group = "certmanager.k8s.io",
    version = "v1alpha1",
    kind = "Issuer",
    plural = "issuers",
    namespaced,
    status = "IssuerStatus",
    derive = "PartialEq",
    printcolumn = r#"{"name":"Ready","type":"string","jsonPath":".status.conditions[?(@.type==\"Ready\")].status"}"#,
    printcolumn = r#"{"name":"Age","type":"date","jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct IssuerSpec {
    /// ACME protocol issuer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acme: Option<AcmeIssuer>,

    /// CA issuer backed by a signing key pair
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca: Option<CaIssuer>,

    /// Self-signed issuer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_signed: Option<SelfSignedIssuer>,
}

impl IssuerSpec {
    /// Backend kinds with a configuration present, in declaration order
    pub fn configured_kinds(&self) -> Vec<IssuerKind> {
        [
            (self.acme.is_some(), IssuerKind::Acme),
            (self.ca.is_some(), IssuerKind::Ca),
            (self.self_signed.is_some(), IssuerKind::SelfSigned),
        ]
        .into_iter()
        .filter_map(|(set, kind)| set.then_some(kind))
        .collect()
    }

    /// The backend kind, if exactly one backend is configured
    pub fn kind(&self) -> Option<IssuerKind> {
        match self.configured_kinds().as_slice() {
            [kind] => Some(*kind),
            _ => None,
        }
    }

    /// Validate the issuer specification
    ///
    /// Exactly one backend must be configured, and that backend must be complete.
    pub fn validate(&self) -> Result<(), crate::Error> {
        let kinds = self.configured_kinds();
        match kinds.len() {
            0 => {
                return Err(crate::Error::validation_field(
                    "spec",
                    "issuer must configure one of 'acme', 'ca' or 'selfSigned'",
                ))
            }
            1 => {}
            _ => {
                let names: Vec<String> = kinds.iter().map(ToString::to_string).collect();
                return Err(crate::Error::validation_field(
                    "spec",
                    format!(
                        "issuer must configure exactly one backend, found: {}",
                        names.join(", ")
                    ),
                ));
            }
        }

        if let Some(acme) = &self.acme {
            if acme.server.is_empty() {
                return Err(crate::Error::validation_field(
                    "spec.acme.server",
                    "ACME server URL must be set",
                ));
            }
            if acme.private_key_secret_ref.name.is_empty() {
                return Err(crate::Error::validation_field(
                    "spec.acme.privateKeySecretRef.name",
                    "ACME account private key secret name must be set",
                ));
            }
        }
        if let Some(ca) = &self.ca {
            if ca.secret_name.is_empty() {
                return Err(crate::Error::validation_field(
                    "spec.ca.secretName",
                    "CA secret name must be set",
                ));
            }
        }
        Ok(())
    }
}

/// Status for an Issuer
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssuerStatus {
    /// Conditions in the order they were recorded
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<IssuerCondition>,

    /// ACME account state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acme: Option<AcmeIssuerStatus>,
}

impl IssuerStatus {
    /// The most recently recorded condition of the given type
    pub fn condition(&self, type_: IssuerConditionType) -> Option<&IssuerCondition> {
        self.conditions.iter().rev().find(|c| c.type_ == type_)
    }

    /// Returns true if the latest `Ready` condition is `True`
    pub fn is_ready(&self) -> bool {
        self.condition(IssuerConditionType::Ready)
            .is_some_and(|c| c.status == ConditionStatus::True)
    }
}

impl Issuer {
    /// Returns true if the issuer reports itself ready
    pub fn is_ready(&self) -> bool {
        self.status.as_ref().is_some_and(IssuerStatus::is_ready)
    }
}
