//! Admin credential verification.

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use dioxus_logger::tracing;

const BCRYPT_PREFIXES: [&str; 4] = ["$2a$", "$2b$", "$2x$", "$2y$"];
const ARGON2_PREFIXES: [&str; 3] = ["$argon2id$", "$argon2i$", "$argon2d$"];

/// Checks a submitted password against the configured admin secret.
///
/// The configured value may be a bcrypt hash, an Argon2 PHC string, or a plain
/// secret compared by equality. A malformed hash never matches.
///
/// Every call is evaluated; there is no lockout or attempt counting.
///
/// # Arguments
/// - `submitted` - Password from the login form
/// - `configured` - Value of `ADMIN_PASSWORD`
///
/// # Returns
/// - `true` - Password matches
/// - `false` - Password does not match, or the configured hash is malformed
pub fn verify_password(submitted: &str, configured: &str) -> bool {
    if BCRYPT_PREFIXES.iter().any(|p| configured.starts_with(p)) {
        return match bcrypt::verify(submitted, configured) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!("Configured bcrypt admin password hash is malformed: {}", e);
                false
            }
        };
    }

    if ARGON2_PREFIXES.iter().any(|p| configured.starts_with(p)) {
        return match PasswordHash::new(configured) {
            Ok(parsed) => Argon2::default()
                .verify_password(submitted.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Configured argon2 admin password hash is malformed: {}", e);
                false
            }
        };
    }

    submitted == configured
}
