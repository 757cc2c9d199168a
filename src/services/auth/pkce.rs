//! PKCE (RFC 7636) code_verifier / code_challenge 생성

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// 64자 code_verifier
///
/// RFC 7636이 허용하는 43-128자 범위이며 16진수 문자만 사용합니다.
pub fn generate_verifier() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

/// `S256` 방식 code_challenge
pub fn challenge_s256(verifier: &str) -> String {
    URL_SAFE_NO_PAD.encode(Sha256::digest(verifier.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc7636_appendix_b_vector() {
        let verifier = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";

        assert_eq!(challenge_s256(verifier), "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM");
    }

    #[test]
    fn test_verifier_length_and_uniqueness() {
        let a = generate_verifier();
        let b = generate_verifier();

        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
    }
}
