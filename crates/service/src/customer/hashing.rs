//! One-way password encoding injected into the customer service.

use argon2::{password_hash::{PasswordHasher, SaltString}, Argon2};
use rand::rngs::OsRng;

use super::errors::CustomerError;

/// Strategy for turning a plaintext password into its stored form.
pub trait PasswordEncoder: Send + Sync {
    fn encode(&self, raw: &str) -> Result<String, CustomerError>;
}

/// Any infallible `Fn(&str) -> String` can act as an encoder.
impl<F> PasswordEncoder for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn encode(&self, raw: &str) -> Result<String, CustomerError> {
        Ok(self(raw))
    }
}

/// Argon2id with a fresh random salt per password, PHC string output.
#[derive(Default, Clone)]
pub struct Argon2PasswordEncoder {
    argon: Argon2<'static>,
}

impl Argon2PasswordEncoder {
    pub fn new() -> Self { Self::default() }
}

impl PasswordEncoder for Argon2PasswordEncoder {
    fn encode(&self, raw: &str) -> Result<String, CustomerError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon
            .hash_password(raw.as_bytes(), &salt)
            .map_err(|e| CustomerError::Hashing(e.to_string()))?
            .to_string();
        Ok(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::{password_hash::PasswordVerifier, PasswordHash};

    #[test]
    fn argon2_hash_verifies_and_hides_plaintext() {
        let enc = Argon2PasswordEncoder::new();
        let hash = enc.encode("password").unwrap();
        assert_ne!(hash, "password");
        assert!(hash.starts_with("$argon2"));
        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(Argon2::default().verify_password(b"password", &parsed).is_ok());
        assert!(Argon2::default().verify_password(b"wrong", &parsed).is_err());
    }

    #[test]
    fn argon2_salts_each_hash() {
        let enc = Argon2PasswordEncoder::new();
        assert_ne!(enc.encode("password").unwrap(), enc.encode("password").unwrap());
    }

    #[test]
    fn closures_are_encoders() {
        let enc = |raw: &str| format!("enc:{raw}");
        assert_eq!(enc.encode("pw").unwrap(), "enc:pw");
    }
}
