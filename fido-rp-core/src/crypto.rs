//! Cryptographic operation wrapper for U2F and Webauthn. This module exists to
//! allow ease of auditing, safe operation wrappers for the openssl primitives, and
//! so that the rest of the crate never sees an openssl type other than a certificate.

use openssl::{bn, ec, hash, memcmp, nid, pkey, sha, sign, stack, x509};
use rand::prelude::*;

use crate::constants::CHALLENGE_SIZE_BYTES;
use crate::error::{FidoError, FidoResult};
use crate::keys::{AttestationCertificate, PublicKey};

/// Compute the sha256 of a slice of data.
pub(crate) fn compute_sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = sha::Sha256::new();
    hasher.update(data);
    hasher.finish()
}

/// Compare two byte strings without leaking the position of the first difference. The lengths
/// are not secret.
pub(crate) fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && memcmp::eq(a, b)
}

/// Fill a new challenge from the thread local CSPRNG.
pub(crate) fn random_challenge_bytes() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    rng.gen::<[u8; CHALLENGE_SIZE_BYTES]>().to_vec()
}

fn is_secp256r1(key: &pkey::PKeyRef<pkey::Public>) -> bool {
    key.ec_key()
        .map(|ec_key| ec_key.group().curve_name() == Some(nid::Nid::X9_62_PRIME256V1))
        .unwrap_or(false)
}

fn verify_with_pkey(
    key: &pkey::PKeyRef<pkey::Public>,
    data: &[u8],
    signature: &[u8],
) -> Result<bool, openssl::error::ErrorStack> {
    let mut verifier = sign::Verifier::new(hash::MessageDigest::sha256(), key)?;
    verifier.update(data)?;
    verifier.verify(signature)
}

fn public_key_to_pkey(
    public_key: &PublicKey,
) -> Result<pkey::PKey<pkey::Public>, openssl::error::ErrorStack> {
    let group = ec::EcGroup::from_curve_name(nid::Nid::X9_62_PRIME256V1)?;
    let mut ctx = bn::BigNumContext::new()?;
    let point = ec::EcPoint::from_bytes(&group, public_key.as_ref(), &mut ctx)?;
    let ec_key = ec::EcKey::from_public_key(&group, &point)?;
    ec_key.check_key()?;
    pkey::PKey::from_ec_key(ec_key)
}

/// Verify an ECDSA P-256 SHA-256 signature with a stored public key. Any failure, whether the
/// point is not on the curve or the signature is wrong, is reported the same way.
pub(crate) fn verify_signature_with_public_key(
    public_key: &PublicKey,
    data: &[u8],
    signature: &[u8],
) -> bool {
    public_key_to_pkey(public_key)
        .and_then(|key| verify_with_pkey(&key, data, signature))
        .unwrap_or(false)
}

/// Verify an ECDSA P-256 SHA-256 signature with the key inside an attestation certificate.
/// A certificate that does not parse, or that carries anything but a P-256 key, never verifies.
pub(crate) fn verify_signature_with_certificate(
    certificate: &AttestationCertificate,
    data: &[u8],
    signature: &[u8],
) -> bool {
    x509::X509::from_der(certificate.as_ref())
        .and_then(|cert| cert.public_key())
        .and_then(|key| {
            if is_secp256r1(&key) {
                verify_with_pkey(&key, data, signature)
            } else {
                Ok(false)
            }
        })
        .unwrap_or(false)
}

/// Check that the attestation certificate chains to one of the trusted roots. The certificate
/// is the leaf; no intermediates are carried by the attestation formats we accept.
pub(crate) fn verify_attestation_ca_chain(
    certificate: &AttestationCertificate,
    trusted_roots: &[x509::X509],
    danger_disable_certificate_time_checks: bool,
) -> FidoResult<()> {
    // If the trust store is empty, no attestation can ever be valid.
    if trusted_roots.is_empty() {
        return Err(FidoError::NoTrustedCa);
    }

    let leaf = x509::X509::from_der(certificate.as_ref()).map_err(|_| FidoError::NoTrustedCa)?;

    build_and_verify(&leaf, trusted_roots, danger_disable_certificate_time_checks)
        .map_err(|_| FidoError::NoTrustedCa)
        .and_then(|valid| {
            if valid {
                Ok(())
            } else {
                Err(FidoError::NoTrustedCa)
            }
        })
}

fn build_and_verify(
    leaf: &x509::X509Ref,
    trusted_roots: &[x509::X509],
    danger_disable_certificate_time_checks: bool,
) -> Result<bool, openssl::error::ErrorStack> {
    let chain = stack::Stack::<x509::X509>::new()?;

    let mut ca_store = x509::store::X509StoreBuilder::new()?;

    // Fixtures and long lived tokens may carry expired attestation certificates.
    if danger_disable_certificate_time_checks {
        ca_store.set_flags(x509::verify::X509VerifyFlags::NO_CHECK_TIME)?;
    }

    for root in trusted_roots {
        ca_store.add_cert(root.clone())?;
    }

    let ca_store = ca_store.build();

    let mut ca_ctx = x509::X509StoreContext::new()?;
    ca_ctx.init(&ca_store, leaf, &chain, |ctx| {
        // verify_cert only reports the boolean, the reason stays in the context.
        ctx.verify_cert()
            .map(|valid| valid && ctx.error() == x509::X509VerifyResult::OK)
    })
}
