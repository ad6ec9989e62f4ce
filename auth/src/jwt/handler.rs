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

use super::claims::Claims;
use super::errors::TokenError;

/// Name of the only algorithm this service signs with or accepts.
const ALGORITHM_NAME: &str = "HS256";

/// Issues and verifies the service's HS256 access tokens.
///
/// Signing and verification share one symmetric secret, injected at
/// construction and fixed for the process lifetime.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new token handler from the signing secret.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Sign a fresh token for an authenticated account.
    ///
    /// # Errors
    /// * `SigningFailed` - the signing operation failed
    pub fn issue(&self, user_id: i64, login: &str) -> Result<String, TokenError> {
        self.encode(&Claims::new(user_id, login))
    }

    /// Sign an explicit claim set.
    ///
    /// Public so tests can mint tokens with validity windows
    /// [`issue`](JwtHandler::issue) would never produce.
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify a presented token and reconstruct its claims.
    ///
    /// Checks, each with its own failure: structural shape (`Malformed`),
    /// the declared algorithm (`UnsupportedAlgorithm`, which also rejects
    /// `alg: "none"`), the signature (`BadSignature`), and the validity
    /// window (`Expired` / `NotYetValid`, both bounds inclusive, no leeway).
    /// No store lookup happens here; the token is self-contained.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let declared = declared_algorithm(token)?;
        if declared != ALGORITHM_NAME {
            return Err(TokenError::UnsupportedAlgorithm(declared));
        }

        let mut validation = Validation::new(self.algorithm);
        validation.validate_nbf = true;
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::ImmatureSignature => TokenError::NotYetValid,
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                _ => TokenError::Malformed(e.to_string()),
            })
    }
}

/// Read the algorithm a token declares in its header, before trusting
/// anything else about it.
///
/// `jsonwebtoken` refuses to parse headers declaring algorithms it does not
/// implement (`alg: "none"` among them), so the header segment is decoded by
/// hand; without this, a downgraded token would be reported as merely
/// malformed instead of rejected for its algorithm.
fn declared_algorithm(token: &str) -> Result<String, TokenError> {
    let segment = token
        .split('.')
        .next()
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| TokenError::Malformed("empty token".to_string()))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| TokenError::Malformed(format!("header is not base64url: {}", e)))?;

    let header: serde_json::Value = serde_json::from_slice(&bytes)
        .map_err(|e| TokenError::Malformed(format!("header is not JSON: {}", e)))?;

    header
        .get("alg")
        .and_then(|alg| alg.as_str())
        .map(str::to_owned)
        .ok_or_else(|| TokenError::Malformed("header has no alg field".to_string()))
}
