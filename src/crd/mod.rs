//! Custom Resource Definitions for certificate issuers
//!
//! This module contains the Issuer CRD and its supporting types.

mod issuer;
mod types;

pub use issuer::{Issuer, IssuerSpec, IssuerStatus};
pub use types::{
    AcmeDns01Config, AcmeDns01Provider, AcmeDnsCloudDns, AcmeDnsCloudflare, AcmeDnsRoute53,
    AcmeHttp01Config, AcmeIssuer, AcmeIssuerStatus, CaIssuer, ConditionStatus, IssuerCondition,
    IssuerConditionType, IssuerKind, SecretKeySelector, SelfSignedIssuer,
};
