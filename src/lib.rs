//! certgen - Issuer resource model and test-fixture generators
//!
//! The Issuer custom resource describes a certificate-issuing authority
//! (ACME, CA-backed or self-signed) for a certificate management controller.
//! This crate models that resource and provides terse generators for
//! building Issuer fixtures in controller unit tests.
//!
//! # Modules
//!
//! - [`crd`] - Issuer Custom Resource Definition and supporting types
//! - [`fixture`] - Functional-option generators for Issuer test fixtures
//! - [`yaml`] - Manifest parsing into typed resources
//! - [`telemetry`] - Tracing setup for tests
//! - [`error`] - Error types

#![deny(missing_docs)]

pub mod crd;
pub mod error;
pub mod fixture;
pub mod telemetry;
pub mod yaml;

pub use error::Error;

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

// =============================================================================
// Default Configuration Constants
// =============================================================================
// Shared by CRD serde defaults and test fixtures.

/// API group of the Issuer custom resource
pub const API_GROUP: &str = "certmanager.k8s.io";

/// API version of the Issuer custom resource
pub const API_VERSION: &str = "v1alpha1";

/// Namespace assigned to generated fixtures
///
/// Issuers are namespaced, so fixtures get a fixed namespace that unit tests
/// can rely on when building object keys.
pub const DEFAULT_TEST_NAMESPACE: &str = "default-unit-test-ns";

/// Let's Encrypt staging directory, used as the default ACME server in fixtures
pub const LETSENCRYPT_STAGING_URL: &str =
    "https://acme-staging-v02.api.letsencrypt.org/directory";

/// Default key within the ACME account private key secret
pub const DEFAULT_ACME_PRIVATE_KEY_KEY: &str = "tls.key";
