//! Site wide settings shared by every ceremony of a relying party.

use openssl::x509::X509;
use url::Url;

use crate::constants::DEFAULT_AUTHENTICATOR_TIMEOUT;
use crate::crypto::compute_sha256;
use crate::error::{FidoError, FidoResult};

/// A constructor for a [RelyingPartyConfig]. This accepts and configures the properties that
/// apply to all U2F and Webauthn operations of this service.
#[derive(Debug)]
pub struct RelyingPartyBuilder<'a> {
    app_id: &'a Url,
    rp_id: String,
    rp_name: Option<&'a str>,
    trusted_roots: Vec<X509>,
    verify_attestation_ca: bool,
    allow_counterless_authenticators: bool,
    danger_disable_certificate_time_checks: bool,
    timeout: u32,
}

impl<'a> RelyingPartyBuilder<'a> {
    /// Initiate a new builder from the application id, which is the origin the site is
    /// served from. The relying party identity is the host of this url.
    ///
    /// # Safety
    ///
    /// Credentials bind themselves to the relying party identity. Changing the host breaks
    /// every registration made under the old one.
    ///
    /// # Examples
    ///
    /// ```
    /// use fido_rp_core::RelyingPartyBuilder;
    /// use url::Url;
    ///
    /// let app_id = Url::parse("https://u2f.example.com").expect("Invalid URL");
    /// let config = RelyingPartyBuilder::new(&app_id)
    ///     .expect("Invalid configuration")
    ///     .rp_name("Example")
    ///     .build();
    /// assert_eq!(config.rp_id(), "u2f.example.com");
    /// ```
    ///
    /// # Errors
    ///
    /// The url must have a host.
    ///
    /// ```
    /// use fido_rp_core::RelyingPartyBuilder;
    /// use url::Url;
    ///
    /// let app_id = Url::parse("data:text/plain,example").expect("Invalid URL");
    /// assert!(RelyingPartyBuilder::new(&app_id).is_err());
    /// ```
    pub fn new(app_id: &'a Url) -> FidoResult<Self> {
        let rp_id = app_id
            .host_str()
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| {
                error!("app id has no host");
                FidoError::Configuration("the app id must have a host")
            })?;

        Ok(RelyingPartyBuilder {
            app_id,
            rp_id,
            rp_name: None,
            trusted_roots: Vec::new(),
            verify_attestation_ca: true,
            allow_counterless_authenticators: true,
            danger_disable_certificate_time_checks: false,
            timeout: DEFAULT_AUTHENTICATOR_TIMEOUT,
        })
    }

    /// Set the relying party name. This may be shown to the user. If not set, defaults to the
    /// relying party identity.
    pub fn rp_name(mut self, rp_name: &'a str) -> Self {
        self.rp_name = Some(rp_name);
        self
    }

    /// Trust attestation certificates issued by this root.
    pub fn trusted_root(mut self, root: X509) -> Self {
        self.trusted_roots.push(root);
        self
    }

    /// Trust every root in a PEM bundle.
    pub fn trusted_roots_pem(mut self, pem: &[u8]) -> FidoResult<Self> {
        let roots = X509::stack_from_pem(pem)?;
        if roots.is_empty() {
            return Err(FidoError::Configuration("the PEM bundle contains no certificates"));
        }
        self.trusted_roots.extend(roots);
        Ok(self)
    }

    /// Require attestation certificates to chain to a trusted root. Defaults to "true".
    ///
    /// With this disabled any authenticator, including a software one, can register.
    pub fn verify_attestation_ca(mut self, verify: bool) -> Self {
        self.verify_attestation_ca = verify;
        self
    }

    /// Accept authenticators that always report a counter of zero. Replay of their assertions
    /// can not be detected. Defaults to "true".
    pub fn allow_counterless_authenticators(mut self, allow: bool) -> Self {
        self.allow_counterless_authenticators = allow;
        self
    }

    /// Ignore certificate validity periods when chaining attestation certificates.
    ///
    /// If in doubt, do NOT change this value. Defaults to "false".
    pub fn danger_disable_certificate_time_checks(mut self, disable: bool) -> Self {
        self.danger_disable_certificate_time_checks = disable;
        self
    }

    /// Milliseconds the browser should wait for the authenticator.
    pub fn timeout(mut self, timeout: u32) -> Self {
        self.timeout = timeout;
        self
    }

    /// Complete the construction of the [RelyingPartyConfig].
    pub fn build(self) -> RelyingPartyConfig {
        if self.verify_attestation_ca && self.trusted_roots.is_empty() {
            warn!(
                "attestation CA verification is enabled without trusted roots, \
                 registrations will fail"
            );
        }

        RelyingPartyConfig {
            app_id: self.app_id.origin().ascii_serialization(),
            rp_name: self.rp_name.unwrap_or(self.rp_id.as_str()).to_string(),
            rp_id_hash: compute_sha256(self.rp_id.as_bytes()),
            rp_id: self.rp_id,
            trusted_roots: self.trusted_roots,
            verify_attestation_ca: self.verify_attestation_ca,
            allow_counterless_authenticators: self.allow_counterless_authenticators,
            danger_disable_certificate_time_checks: self.danger_disable_certificate_time_checks,
            timeout: self.timeout,
        }
    }
}

/// The immutable configuration of a relying party.
#[derive(Debug, Clone)]
pub struct RelyingPartyConfig {
    app_id: String,
    rp_id: String,
    rp_name: String,
    rp_id_hash: [u8; 32],
    trusted_roots: Vec<X509>,
    verify_attestation_ca: bool,
    allow_counterless_authenticators: bool,
    danger_disable_certificate_time_checks: bool,
    timeout: u32,
}

impl RelyingPartyConfig {
    /// The U2F application id: the serialised origin of the site.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// The relying party identity (the lower-cased host).
    pub fn rp_id(&self) -> &str {
        &self.rp_id
    }

    /// The display name of the relying party.
    pub fn rp_name(&self) -> &str {
        &self.rp_name
    }

    /// SHA-256 of [Self::rp_id]. Every response must have been made for this hash.
    pub fn rp_id_hash(&self) -> &[u8; 32] {
        &self.rp_id_hash
    }

    /// The roots attestation certificates must chain to.
    pub fn trusted_roots(&self) -> &[X509] {
        &self.trusted_roots
    }

    /// Whether attestation certificates are checked against [Self::trusted_roots].
    pub fn verify_attestation_ca(&self) -> bool {
        self.verify_attestation_ca
    }

    /// Whether a stored and reported counter of zero is accepted.
    pub fn allow_counterless_authenticators(&self) -> bool {
        self.allow_counterless_authenticators
    }

    /// Whether certificate validity periods are ignored.
    pub fn danger_disable_certificate_time_checks(&self) -> bool {
        self.danger_disable_certificate_time_checks
    }

    /// Milliseconds the browser should wait for the authenticator.
    pub fn timeout(&self) -> u32 {
        self.timeout
    }
}
