//! Single-admin access control shared by both registries.
//!
//! A guard holds exactly one admin identity. Mutating operations call
//! [`AccessGuard::authorize`] before touching any state, so an unauthorized
//! call observably does nothing.

use tracing::{debug, warn};

use crate::{Error, Principal};

#[derive(Debug)]
pub struct AccessGuard {
    admin: Principal,
}

impl AccessGuard {
    /// Creates a guard with the deployer as the initial admin.
    pub fn new(deployer: Principal) -> Self {
        Self { admin: deployer }
    }

    /// Returns true iff `caller` is the current admin.
    pub fn check_admin(&self, caller: &Principal) -> bool {
        *caller == self.admin
    }

    pub fn admin(&self) -> &Principal {
        &self.admin
    }

    /// Fails with [`Error::Unauthorized`] unless `caller` is the current
    /// admin. Stores call this before any state mutation.
    pub fn authorize(&self, caller: &Principal) -> Result<(), Error> {
        if !self.check_admin(caller) {
            warn!(caller = caller.as_str(), "unauthorized call rejected");
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    /// Reassigns the admin. Any identity value is accepted as the new admin,
    /// including the current one; reassignment records no timestamp.
    pub fn transfer_admin(&mut self, caller: &Principal, new_admin: Principal) -> Result<(), Error> {
        self.authorize(caller)?;
        debug!(
            old = self.admin.as_str(),
            new = new_admin.as_str(),
            "admin transferred"
        );
        self.admin = new_admin;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deployer_is_initial_admin() {
        let guard = AccessGuard::new(Principal::from("deployer"));
        assert!(guard.check_admin(&Principal::from("deployer")));
        assert!(!guard.check_admin(&Principal::from("someone-else")));
    }

    #[test]
    fn test_transfer_admin() {
        let mut guard = AccessGuard::new(Principal::from("deployer"));
        guard
            .transfer_admin(&Principal::from("deployer"), Principal::from("new-admin"))
            .unwrap();

        assert!(guard.check_admin(&Principal::from("new-admin")));
        assert!(!guard.check_admin(&Principal::from("deployer")));
    }

    #[test]
    fn test_non_admin_cannot_transfer() {
        let mut guard = AccessGuard::new(Principal::from("deployer"));
        let result =
            guard.transfer_admin(&Principal::from("mallory"), Principal::from("mallory"));

        assert!(matches!(result, Err(Error::Unauthorized)));
        // Admin is unchanged.
        assert!(guard.check_admin(&Principal::from("deployer")));
    }

    #[test]
    fn test_transfer_to_current_admin_is_accepted() {
        let mut guard = AccessGuard::new(Principal::from("deployer"));
        guard
            .transfer_admin(&Principal::from("deployer"), Principal::from("deployer"))
            .unwrap();
        assert!(guard.check_admin(&Principal::from("deployer")));
    }

    #[test]
    fn test_chained_transfers() {
        let mut guard = AccessGuard::new(Principal::from("deployer"));
        guard
            .transfer_admin(&Principal::from("deployer"), Principal::from("a"))
            .unwrap();
        guard
            .transfer_admin(&Principal::from("a"), Principal::from("b"))
            .unwrap();

        // Only the latest admin holds privileges.
        assert!(guard.check_admin(&Principal::from("b")));
        assert!(guard.authorize(&Principal::from("a")).is_err());
        assert!(guard.authorize(&Principal::from("deployer")).is_err());
    }
}
