use sha2::Sha256;

/// Number of pbkdf2 rounds for password hashes.
const ROUNDS: u32 = 100_000;

/// Hash a password using pbkdf2_hmac with sha256 and a random
/// 16 byte salt. The result is self-describing:
/// `pbkdf2-sha256$<rounds>$<salt hex>$<key hex>`.
pub fn hash_password(password: &str) -> String {
    let salt: [u8; 16] = rand::random();
    let key = derive_key(password, &salt, ROUNDS);
    format!(
        "pbkdf2-sha256${}${}${}",
        ROUNDS,
        hex::encode(salt),
        hex::encode(key)
    )
}

/// Verify a password against a stored hash. Malformed hashes
/// never verify.
pub fn verify_password(stored: &str, password: &str) -> bool {
    let parts: Vec<&str> = stored.split('$').collect();
    if parts.len() != 4 || parts[0] != "pbkdf2-sha256" {
        return false;
    }
    let rounds: u32 = match parts[1].parse() {
        Ok(rounds) => rounds,
        Err(_) => return false,
    };
    let salt = match hex::decode(parts[2]) {
        Ok(salt) => salt,
        Err(_) => return false,
    };
    let key = derive_key(password, &salt, rounds);
    hex::encode(key) == parts[3]
}

fn derive_key(password: &str, salt: &[u8], rounds: u32) -> [u8; 32] {
    let mut key = [0u8; 32];
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, rounds, &mut key);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("hunter2");
        assert!(hash.starts_with("pbkdf2-sha256$"));
        assert!(verify_password(&hash, "hunter2"));
        assert!(!verify_password(&hash, "hunter3"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let h1 = hash_password("hunter2");
        let h2 = hash_password("hunter2");
        assert_ne!(h1, h2);
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        assert!(!verify_password("", "hunter2"));
        assert!(!verify_password("plaintext", "plaintext"));
        assert!(!verify_password("pbkdf2-sha256$x$y$z", "hunter2"));
    }
}
