use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;

use super::claims::Claims;
use super::errors::JwtError;
use super::errors::TokenRejection;

/// Name of the only algorithm accepted in a token header.
const EXPECTED_ALGORITHM: &str = "HS256";

/// JWT token handler for issuing and validating session tokens.
///
/// Signs with HS256 (HMAC with SHA-256) using a secret fixed at construction.
/// The key material never changes afterwards, so a handler can be shared
/// across requests without locking.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

/// The part of a token header inspected before any signature work.
#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Encode claims into a signed token.
    ///
    /// HMAC signing carries no per-call randomness: identical claims always
    /// produce an identical token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(Algorithm::HS256);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token.
    ///
    /// The declared algorithm is checked first, so a header announcing
    /// `none` or any other algorithm is refused regardless of its signature.
    ///
    /// # Errors
    /// * `MalformedClaims` - Token structure, header, or claims are unreadable
    /// * `AlgorithmMismatch` - Header declares anything but HS256
    /// * `BadSignature` - Signature does not match this handler's secret
    /// * `Expired` - `exp` lies in the past
    pub fn decode(&self, token: &str) -> Result<Claims, TokenRejection> {
        let algorithm = declared_algorithm(token)?;
        if algorithm != EXPECTED_ALGORITHM {
            return Err(TokenRejection::AlgorithmMismatch);
        }

        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenRejection::Expired,
                ErrorKind::InvalidSignature => TokenRejection::BadSignature,
                ErrorKind::InvalidAlgorithm => TokenRejection::AlgorithmMismatch,
                _ => TokenRejection::MalformedClaims,
            })
    }
}

/// Read the `alg` field of a compact token without trusting anything else.
fn declared_algorithm(token: &str) -> Result<String, TokenRejection> {
    let mut segments = token.split('.');
    let (Some(header), Some(_), Some(_), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenRejection::MalformedClaims);
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(header)
        .map_err(|_| TokenRejection::MalformedClaims)?;
    let header: RawHeader =
        serde_json::from_slice(&bytes).map_err(|_| TokenRejection::MalformedClaims)?;

    Ok(header.alg)
}
