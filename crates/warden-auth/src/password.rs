//! Argon2id password hashing and verification.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::error::{AuthError, AuthResult};

/// Cost parameters for Argon2id hashing.
#[derive(Debug, Clone)]
pub struct HashingPolicy {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of passes over the memory.
    pub iterations: u32,
    /// Degree of parallelism.
    pub lanes: u32,
    /// Length of the derived hash in bytes.
    pub output_len: usize,
}

impl Default for HashingPolicy {
    fn default() -> Self {
        // OWASP recommended settings for Argon2id
        Self {
            memory_kib: 19 * 1024,
            iterations: 2,
            lanes: 1,
            output_len: 32,
        }
    }
}

impl HashingPolicy {
    /// Creates a policy with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the memory cost in KiB.
    #[must_use]
    pub const fn with_memory_kib(mut self, kib: u32) -> Self {
        self.memory_kib = kib;
        self
    }

    /// Sets the number of passes over the memory.
    #[must_use]
    pub const fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the degree of parallelism.
    #[must_use]
    pub const fn with_lanes(mut self, lanes: u32) -> Self {
        self.lanes = lanes;
        self
    }

    #[allow(clippy::missing_const_for_fn)] // Params::new is not const
    fn build_params(&self) -> Result<Params, argon2::Error> {
        Params::new(
            self.memory_kib,
            self.iterations,
            self.lanes,
            Some(self.output_len),
        )
    }
}

/// Hashes and verifies local password credentials.
#[derive(Debug, Clone, Default)]
pub struct CredentialHasher {
    policy: HashingPolicy,
}

impl CredentialHasher {
    /// Creates a hasher with the given policy.
    #[must_use]
    pub const fn new(policy: HashingPolicy) -> Self {
        Self { policy }
    }

    /// Hashes a password into a PHC-formatted string.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Internal`] if the parameters are rejected or
    /// hashing itself fails.
    pub fn hash(&self, password: &str) -> AuthResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let params = self
            .policy
            .build_params()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(hash.to_string())
    }

    /// Verifies a password against a stored PHC-formatted hash.
    ///
    /// A stored hash that does not parse fails closed: the caller sees the
    /// same mismatch a wrong password produces, never a hint that the
    /// stored credential is damaged.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::CredentialMismatch`] if the password does not
    /// match or the stored hash is unreadable.
    pub fn verify(&self, password: &str, stored: &str) -> AuthResult<()> {
        let parsed = PasswordHash::new(stored).map_err(|_| {
            tracing::debug!("stored password hash did not parse");
            AuthError::CredentialMismatch
        })?;

        // Argon2::default() verifies with the parameters carried in the hash
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| AuthError::CredentialMismatch)
    }

    /// Returns `true` if a stored hash was not produced under this policy
    /// and should be re-hashed on the next successful sign-in.
    #[must_use]
    pub fn needs_rehash(&self, stored: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(stored) else {
            return true;
        };

        if parsed.algorithm != argon2::ARGON2ID_IDENT {
            return true;
        }

        let params = &parsed.params;
        let memory_kib = params.get_decimal("m").unwrap_or(0);
        let iterations = params.get_decimal("t").unwrap_or(0);
        let lanes = params.get_decimal("p").unwrap_or(0);

        memory_kib != self.policy.memory_kib
            || iterations != self.policy.iterations
            || lanes != self.policy.lanes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hasher = CredentialHasher::default();
        let password = "correct horse battery staple";

        let hash = hasher.hash(password).unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify(password, &hash).is_ok());
        assert_eq!(
            hasher.verify("wrong password", &hash),
            Err(AuthError::CredentialMismatch)
        );
    }

    #[test]
    fn salts_make_equal_passwords_hash_differently() {
        let hasher = CredentialHasher::default();

        let first = hasher.hash("password1").unwrap();
        let second = hasher.hash("password1").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("password1", &first).is_ok());
        assert!(hasher.verify("password1", &second).is_ok());
    }

    #[test]
    fn unreadable_stored_hashes_fail_as_mismatch() {
        let hasher = CredentialHasher::default();
        assert_eq!(
            hasher.verify("anything", "not-a-phc-string"),
            Err(AuthError::CredentialMismatch)
        );
    }

    #[test]
    fn needs_rehash_detects_a_policy_change() {
        let hasher = CredentialHasher::default();
        let hash = hasher.hash("password").unwrap();

        assert!(!hasher.needs_rehash(&hash));

        let stricter = CredentialHasher::new(
            HashingPolicy::new().with_memory_kib(32 * 1024).with_iterations(3),
        );
        assert!(stricter.needs_rehash(&hash));
        assert!(stricter.needs_rehash("not-a-phc-string"));
    }

    #[test]
    fn custom_policies_round_trip() {
        let policy = HashingPolicy::new()
            .with_memory_kib(8 * 1024)
            .with_iterations(1)
            .with_lanes(2);
        let hasher = CredentialHasher::new(policy);

        let hash = hasher.hash("password").unwrap();
        assert!(hasher.verify("password", &hash).is_ok());
        assert!(!hasher.needs_rehash(&hash));
    }
}
