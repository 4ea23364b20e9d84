//! Identity-verification registry with admin-gated writes and public reads.
//!
//! Verification always writes the full record with `verified = true`;
//! revocation removes the record outright rather than flipping the flag, so
//! a revoked user is indistinguishable from one never verified.

use std::collections::HashMap;

use tracing::debug;

use crate::access::AccessGuard;
use crate::types::{BlockHeight, IdentityRecord, Principal};
use crate::Error;

pub struct IdentityStore {
    guard: AccessGuard,
    identities: HashMap<Principal, IdentityRecord>,
}

impl IdentityStore {
    /// Creates an empty registry administered by `deployer`.
    pub fn new(deployer: Principal) -> Self {
        Self {
            guard: AccessGuard::new(deployer),
            identities: HashMap::new(),
        }
    }

    /// Returns the stored verification flag, or `false` for unknown users.
    /// Total: never fails and never distinguishes "revoked" from "never
    /// verified".
    pub fn is_verified(&self, user: &Principal) -> bool {
        self.identities
            .get(user)
            .map_or(false, |record| record.verified)
    }

    /// Raw record lookup; absent if never verified or since revoked.
    pub fn get_user_details(&self, user: &Principal) -> Option<&IdentityRecord> {
        self.identities.get(user)
    }

    /// Inserts or overwrites the verification record for `user`, stamped
    /// with the supplied block height. Admin only. Re-verifying an existing
    /// user replaces every field, including the date.
    pub fn verify_user(
        &mut self,
        caller: &Principal,
        user: Principal,
        name: impl Into<String>,
        country: impl Into<String>,
        id_number: impl Into<String>,
        block_height: BlockHeight,
    ) -> Result<(), Error> {
        self.guard.authorize(caller)?;
        debug!(user = user.as_str(), block_height, "user verified");
        self.identities.insert(
            user,
            IdentityRecord {
                verified: true,
                name: name.into(),
                country: country.into(),
                id_number: id_number.into(),
                verification_date: block_height,
            },
        );
        Ok(())
    }

    /// Removes the verification record for `user` entirely. Admin only.
    /// Revoking a user with no record succeeds and changes nothing.
    pub fn revoke_verification(&mut self, caller: &Principal, user: &Principal) -> Result<(), Error> {
        self.guard.authorize(caller)?;
        debug!(user = user.as_str(), "verification revoked");
        self.identities.remove(user);
        Ok(())
    }

    /// Transfers admin rights. Delegates to the guard.
    pub fn set_admin(&mut self, caller: &Principal, new_admin: Principal) -> Result<(), Error> {
        self.guard.transfer_admin(caller, new_admin)
    }

    pub fn admin(&self) -> &Principal {
        self.guard.admin()
    }
}
