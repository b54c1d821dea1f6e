use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use uuid::Uuid;

use super::claims::Claims;
use crate::{error::ApiError, state::AppState};

/// Extracts and validates the bearer JWT, yielding the verified caller id.
pub struct AuthUser(pub Uuid);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                ApiError::Unauthenticated("missing Authorization header".into())
            })?;

        // Expect "Bearer <token>"
        let token = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
            .ok_or_else(|| ApiError::Unauthenticated("invalid auth scheme".into()))?;

        let cfg = &state.config.jwt;
        let mut validation = Validation::default();
        validation.set_audience(std::slice::from_ref(&cfg.audience));
        validation.set_issuer(std::slice::from_ref(&cfg.issuer));
        let decoding = DecodingKey::from_secret(cfg.secret.as_bytes());

        let data = decode::<Claims>(token, &decoding, &validation)
            .map_err(|_| ApiError::Unauthenticated("invalid or expired token".into()))?;

        Ok(AuthUser(data.claims.sub))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::http::Request;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use time::OffsetDateTime;

    fn sign(state: &AppState, user_id: Uuid) -> String {
        let cfg = &state.config.jwt;
        let now = OffsetDateTime::now_utc().unix_timestamp() as usize;
        let claims = Claims {
            sub: user_id,
            iat: now,
            exp: now + 300,
            iss: cfg.issuer.clone(),
            aud: cfg.audience.clone(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(cfg.secret.as_bytes()),
        )
        .expect("sign test token")
    }

    async fn extract(state: &AppState, header: Option<String>) -> Result<Uuid, ApiError> {
        let mut builder = Request::builder().uri("/");
        if let Some(h) = header {
            builder = builder.header(axum::http::header::AUTHORIZATION, h);
        }
        let (mut parts, ()) = builder.body(()).unwrap().into_parts();
        AuthUser::from_request_parts(&mut parts, state)
            .await
            .map(|AuthUser(id)| id)
    }

    #[tokio::test]
    async fn accepts_valid_bearer_token() {
        let state = AppState::fake();
        let user_id = Uuid::new_v4();
        let token = sign(&state, user_id);
        let got = extract(&state, Some(format!("Bearer {token}"))).await.unwrap();
        assert_eq!(got, user_id);
    }

    #[tokio::test]
    async fn rejects_missing_header() {
        let state = AppState::fake();
        let err = extract(&state, None).await.unwrap_err();
        assert_eq!(err.kind(), "unauthenticated");
    }

    #[tokio::test]
    async fn rejects_wrong_scheme_and_garbage_token() {
        let state = AppState::fake();
        let err = extract(&state, Some("Basic abc".into())).await.unwrap_err();
        assert_eq!(err.kind(), "unauthenticated");

        let err = extract(&state, Some("Bearer not-a-jwt".into())).await.unwrap_err();
        assert_eq!(err.kind(), "unauthenticated");
    }
}
