//! Token helpers for the bearer-token auth flow.

use jsonwebtoken::{
    decode, encode, errors::Error as JwtError, Algorithm, DecodingKey, EncodingKey, Header,
    TokenData, Validation,
};
use serde::{de::DeserializeOwned, Serialize};

/// Signs `claims` into a compact JWT. HS256 unless another algorithm is given.
#[inline]
pub fn encode_jwt<T: Serialize>(
    claims: &T,
    secret: &[u8],
    algorithm: Option<Algorithm>,
) -> Result<String, JwtError> {
    let header = Header::new(algorithm.unwrap_or(Algorithm::HS256));
    encode(&header, claims, &EncodingKey::from_secret(secret))
}

/// Verifies a token and deserializes its claims.
///
/// Callers that need issuer or expiry checks beyond the defaults pass their
/// own `Validation`.
#[inline]
pub fn decode_jwt<T: DeserializeOwned>(
    token: &str,
    secret: &[u8],
    validation: Option<Validation>,
) -> Result<TokenData<T>, JwtError> {
    let validation = validation.unwrap_or_default();
    decode::<T>(token, &DecodingKey::from_secret(secret), &validation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize)]
    struct TestClaims {
        sub: String,
        exp: i64,
    }

    #[test]
    fn test_round_trip_preserves_claims() {
        let claims = TestClaims {
            sub: "42".to_string(),
            exp: 4_102_444_800,
        };
        let token = encode_jwt(&claims, b"secret", None).unwrap();
        let decoded = decode_jwt::<TestClaims>(&token, b"secret", None).unwrap();
        assert_eq!(decoded.claims.sub, "42");
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let claims = TestClaims {
            sub: "42".to_string(),
            exp: 4_102_444_800,
        };
        let token = encode_jwt(&claims, b"secret", None).unwrap();
        assert!(decode_jwt::<TestClaims>(&token, b"other", None).is_err());
    }
}
