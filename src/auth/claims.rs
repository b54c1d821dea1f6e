use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT payload issued by the external identity provider. This service only
/// verifies; it never signs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,   // caller id, scopes every persisted record
    pub iat: usize,  // issued at (unix timestamp)
    pub exp: usize,  // expires at (unix timestamp)
    pub iss: String, // issuer
    pub aud: String, // audience
}
