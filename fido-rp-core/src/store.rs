//! Persistence of registrations. The verification engine performs no I/O; callers load the
//! account's registrations, verify, and write back the registration it returns.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::error::Error;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::keys::{HasKeyHandle, KeyHandle};
use crate::registration::Registration;

/// Where registrations live between ceremonies.
///
/// Two authentications of the same credential can race. Implementations must make
/// [Self::compare_and_swap_counter] atomic, so that only one of them stores its counter and
/// the counter never moves backwards.
pub trait RegistrationStore {
    /// Error type of the backing storage.
    type Error: Error;

    /// Every registration of an account. An unknown account has none.
    fn registrations(&self, account: &str) -> Result<Vec<Registration>, Self::Error>;

    /// Add a registration to an account. Returns false, and stores nothing, if the key handle
    /// is already registered to the account.
    fn insert(&self, account: &str, registration: Registration) -> Result<bool, Self::Error>;

    /// Set the counter of the registration for `key_handle` to `counter`, but only if its
    /// stored counter still equals `previous`. Only the counter changes.
    ///
    /// Returns false, and stores nothing, if another update won, if the registration is gone,
    /// or if `counter` is not greater than `previous`. Both being zero is accepted for
    /// authenticators without a counter.
    fn compare_and_swap_counter(
        &self,
        account: &str,
        key_handle: &KeyHandle,
        previous: u32,
        counter: u32,
    ) -> Result<bool, Self::Error>;
}

/// The counter may only grow, except that an authenticator without a counter keeps reporting
/// zero.
fn counter_advances(previous: u32, counter: u32) -> bool {
    counter > previous || (previous == 0 && counter == 0)
}

/// An in-memory [RegistrationStore] for tests and demonstrations. Everything is lost when it
/// is dropped. Do NOT use this in production.
#[derive(Debug, Default)]
pub struct EphemeralRegistrationStore {
    accounts: Mutex<BTreeMap<String, Vec<Registration>>>,
}

impl EphemeralRegistrationStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock can not leave a half written Vec behind, so the data is
    // still consistent.
    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, Vec<Registration>>> {
        self.accounts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RegistrationStore for EphemeralRegistrationStore {
    type Error = Infallible;

    fn registrations(&self, account: &str) -> Result<Vec<Registration>, Infallible> {
        Ok(self.lock().get(account).cloned().unwrap_or_default())
    }

    fn insert(&self, account: &str, registration: Registration) -> Result<bool, Infallible> {
        let mut accounts = self.lock();
        let regs = accounts.entry(account.to_string()).or_default();
        if regs
            .iter()
            .any(|r| r.key_handle() == registration.key_handle())
        {
            debug!(%account, "key handle is already registered");
            return Ok(false);
        }
        regs.push(registration);
        Ok(true)
    }

    fn compare_and_swap_counter(
        &self,
        account: &str,
        key_handle: &KeyHandle,
        previous: u32,
        counter: u32,
    ) -> Result<bool, Infallible> {
        if !counter_advances(previous, counter) {
            debug!(%account, previous, counter, "refusing to move the counter backwards");
            return Ok(false);
        }

        let mut accounts = self.lock();
        let stored = accounts
            .get_mut(account)
            .and_then(|regs| regs.iter_mut().find(|r| r.key_handle() == key_handle));

        match stored {
            Some(stored) if stored.counter() == previous => {
                *stored = stored.with_counter(counter);
                Ok(true)
            }
            Some(_) => {
                debug!(%account, "counter changed concurrently");
                Ok(false)
            }
            None => Ok(false),
        }
    }
}
