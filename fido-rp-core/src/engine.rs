//! The verification steps shared by both protocols.
//!
//! Every step runs in a fixed order and the first failure ends the ceremony. Cheap checks on the
//! challenge and relying party come before any signature is verified. The typed error is the
//! only record of which step failed; nothing here logs it.

use tracing::instrument;

use crate::config::RelyingPartyConfig;
use crate::crypto::{
    verify_attestation_ca_chain, verify_signature_with_certificate,
    verify_signature_with_public_key,
};
use crate::error::{FidoError, FidoResult};
use crate::keys::{HasKeyHandle, KeyHandle};
use crate::registration::Registration;
use crate::request::{RegisterRequest, SignRequest};
use crate::response::{AuthenticationCeremony, RegistrationCeremony};

fn find_by_key_handle<'a, T: HasKeyHandle>(
    candidates: &'a [T],
    key_handle: &KeyHandle,
) -> Option<&'a T> {
    // KeyHandle equality is constant time.
    candidates.iter().find(|c| c.key_handle() == key_handle)
}

/// A stored counter and a reported counter of zero means the authenticator has no counter.
fn counter_accepted(config: &RelyingPartyConfig, stored: u32, reported: u32) -> bool {
    if stored == 0 && reported == 0 && config.allow_counterless_authenticators() {
        return true;
    }
    reported > stored
}

/// Verify a registration response against the request it answers. The new registration starts
/// with a counter of zero, since registration messages carry none.
#[instrument(level = "debug", skip_all)]
pub(crate) fn verify_registration<R: RegistrationCeremony>(
    config: &RelyingPartyConfig,
    request: Option<&RegisterRequest>,
    response: &R,
) -> FidoResult<Registration> {
    let request = request.ok_or(FidoError::MissingRegisterRequest)?;

    if response.client_data().challenge() != request.challenge() {
        return Err(FidoError::ChallengeMismatch);
    }

    if !response.relying_party_matches(config.rp_id_hash()) {
        return Err(FidoError::WrongRelyingParty);
    }

    let certificate = response.attestation_certificate();

    if config.verify_attestation_ca() {
        verify_attestation_ca_chain(
            certificate,
            config.trusted_roots(),
            config.danger_disable_certificate_time_checks(),
        )?;
    }

    if !verify_signature_with_certificate(
        certificate,
        &response.signed_data(),
        response.signature(),
    ) {
        return Err(FidoError::SignatureInvalid);
    }

    Ok(Registration::new(
        response.key_handle().clone(),
        response.public_key().clone(),
        certificate.clone(),
        0,
    ))
}

/// Verify an authentication response against the account's registrations and the outstanding
/// sign requests. On success the matched registration is returned with the reported counter;
/// the caller must persist it in place of the old one.
#[instrument(level = "debug", skip_all)]
pub(crate) fn verify_authentication<A: AuthenticationCeremony>(
    config: &RelyingPartyConfig,
    registrations: &[Registration],
    sign_requests: &[SignRequest],
    response: &A,
) -> FidoResult<Registration> {
    if registrations.is_empty() {
        return Err(FidoError::NoRegistrations);
    }
    if sign_requests.is_empty() {
        return Err(FidoError::NoSignRequests);
    }

    let registration = find_by_key_handle(registrations, response.key_handle())
        .ok_or(FidoError::KeyHandleUnrecognized)?;

    let sign_request = find_by_key_handle(sign_requests, registration.key_handle())
        .ok_or(FidoError::KeyHandleUnrecognized)?;

    if response.client_data().challenge() != sign_request.challenge() {
        return Err(FidoError::ChallengeMismatch);
    }

    if !response.relying_party_matches(config.rp_id_hash()) {
        return Err(FidoError::WrongRelyingParty);
    }

    if !verify_signature_with_public_key(
        registration.public_key(),
        &response.signed_data(),
        response.signature(),
    ) {
        return Err(FidoError::SignatureInvalid);
    }

    if !counter_accepted(config, registration.counter(), response.counter()) {
        return Err(FidoError::CounterUsed);
    }

    Ok(registration.with_counter(response.counter()))
}
