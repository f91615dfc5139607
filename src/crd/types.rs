//! Supporting types for the Issuer CRD

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Issuance backend kinds
#[derive(Clone, Copy, Debug, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum IssuerKind {
    /// ACME protocol (e.g., Let's Encrypt)
    Acme,
    /// Private CA backed by a signing key pair in a Secret
    Ca,
    /// Certificates signed with their own private key
    SelfSigned,
}

impl std::str::FromStr for IssuerKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "acme" => Ok(Self::Acme),
            "ca" => Ok(Self::Ca),
            "selfsigned" => Ok(Self::SelfSigned),
            _ => Err(crate::Error::validation(format!(
                "invalid issuer kind: {s}, expected one of: acme, ca, selfSigned"
            ))),
        }
    }
}

impl std::fmt::Display for IssuerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Acme => write!(f, "acme"),
            Self::Ca => write!(f, "ca"),
            Self::SelfSigned => write!(f, "selfSigned"),
        }
    }
}

/// Reference to a key within a Secret in the Issuer's namespace
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct SecretKeySelector {
    /// Name of the Secret
    pub name: String,

    /// Key within the Secret
    #[serde(default = "default_private_key_key")]
    pub key: String,
}

fn default_private_key_key() -> String {
    crate::DEFAULT_ACME_PRIVATE_KEY_KEY.to_string()
}

impl SecretKeySelector {
    /// Select the default private key entry of the named Secret
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: default_private_key_key(),
        }
    }
}

/// ACME issuer configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AcmeIssuer {
    /// Email address registered with the ACME account
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,

    /// ACME directory URL
    pub server: String,

    /// Skip TLS verification of the ACME server (testing only)
    #[serde(rename = "skipTLSVerify", default, skip_serializing_if = "is_false")]
    pub skip_tls_verify: bool,

    /// Secret holding the ACME account private key
    pub private_key_secret_ref: SecretKeySelector,

    /// HTTP-01 challenge solver configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http01: Option<AcmeHttp01Config>,

    /// DNS-01 challenge solver configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns01: Option<AcmeDns01Config>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// HTTP-01 solver configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AcmeHttp01Config {
    /// Service type used to expose the solver pod (NodePort, ClusterIP)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
}

/// DNS-01 solver configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct AcmeDns01Config {
    /// Named DNS providers that certificates can select
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub providers: Vec<AcmeDns01Provider>,
}

impl AcmeDns01Config {
    /// Look up a provider by name
    pub fn provider(&self, name: &str) -> Option<&AcmeDns01Provider> {
        self.providers.iter().find(|p| p.name == name)
    }
}

/// A named DNS-01 provider
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct AcmeDns01Provider {
    /// Provider name referenced from certificates
    pub name: String,

    /// Cloudflare DNS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloudflare: Option<AcmeDnsCloudflare>,

    /// AWS Route53
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route53: Option<AcmeDnsRoute53>,

    /// Google Cloud DNS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clouddns: Option<AcmeDnsCloudDns>,
}

/// Cloudflare DNS-01 provider
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AcmeDnsCloudflare {
    /// Cloudflare account email
    pub email: String,

    /// Secret holding the API key
    pub api_key_secret_ref: SecretKeySelector,
}

/// AWS Route53 DNS-01 provider
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AcmeDnsRoute53 {
    /// AWS region
    pub region: String,

    /// Hosted zone to manage records in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosted_zone_id: Option<String>,
}

/// Google Cloud DNS-01 provider
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AcmeDnsCloudDns {
    /// GCP project containing the managed zone
    pub project: String,

    /// Secret holding the service account JSON
    pub service_account_secret_ref: SecretKeySelector,
}

/// CA issuer configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaIssuer {
    /// Secret holding the CA certificate and signing key
    pub secret_name: String,
}

/// Self-signed issuer configuration (no options)
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct SelfSignedIssuer {}

/// ACME account state recorded by the controller
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct AcmeIssuerStatus {
    /// Registered ACME account URI
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uri: String,
}

/// Issuer condition types
#[derive(Clone, Copy, Debug, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
#[non_exhaustive]
pub enum IssuerConditionType {
    /// Issuer is able to issue certificates
    Ready,
}

impl std::fmt::Display for IssuerConditionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready => write!(f, "Ready"),
        }
    }
}

/// Condition status following Kubernetes conventions
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub enum ConditionStatus {
    /// Condition is true
    True,
    /// Condition is false
    False,
    /// Condition status is unknown
    #[default]
    Unknown,
}

impl std::fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::True => write!(f, "True"),
            Self::False => write!(f, "False"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Kubernetes-style condition recorded on an Issuer's status
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssuerCondition {
    /// Type of condition
    #[serde(rename = "type")]
    pub type_: IssuerConditionType,

    /// Status of the condition (True, False, Unknown)
    pub status: ConditionStatus,

    /// Machine-readable reason for the condition
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,

    /// Human-readable message
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,

    /// Last time the condition transitioned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<DateTime<Utc>>,
}

impl IssuerCondition {
    /// Create a new condition with the current timestamp
    pub fn new(
        type_: IssuerConditionType,
        status: ConditionStatus,
        reason: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            type_,
            status,
            reason: reason.into(),
            message: message.into(),
            last_transition_time: Some(Utc::now()),
        }
    }

    /// Create a `Ready` condition with the current timestamp
    pub fn ready(
        status: ConditionStatus,
        reason: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(IssuerConditionType::Ready, status, reason, message)
    }
}
