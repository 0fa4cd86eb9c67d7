use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::Deserialize;

use business::domain::shared::value_objects::{Requester, UserId};

const ADMIN_ROLE: &str = "admin";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.keys_not_configured")]
    KeysNotConfigured,
    #[error("auth.token_validation_failed: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    #[error("auth.empty_subject")]
    EmptySubject,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Claims {
    sub: String,
    role: Option<String>,
    exp: u64,
}

/// Verification key for bearer tokens, attached to every request as data.
#[derive(Clone)]
pub struct JwtKeys {
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn from_secret(secret: &str) -> Self {
        Self {
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

pub fn decode_requester(token: &str, keys: &JwtKeys) -> Result<Requester, AuthError> {
    let validation = Validation::new(Algorithm::HS256);
    let data = decode::<Claims>(token, &keys.decoding, &validation)?;

    if data.claims.sub.trim().is_empty() {
        return Err(AuthError::EmptySubject);
    }

    let is_admin = data.claims.role.as_deref() == Some(ADMIN_ROLE);
    Ok(Requester::new(UserId::new(data.claims.sub), is_admin))
}

/// HS256 bearer token; `sub` identifies the user, `role: "admin"` grants admin rights
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "jwt_bearer_checker")]
pub struct JwtBearer(pub Requester);

async fn jwt_bearer_checker(req: &Request, bearer: poem_openapi::auth::Bearer) -> Option<Requester> {
    let result = req
        .data::<JwtKeys>()
        .ok_or(AuthError::KeysNotConfigured)
        .and_then(|keys| decode_requester(&bearer.token, keys));

    match result {
        Ok(requester) => Some(requester),
        Err(e) => {
            tracing::warn!("Bearer auth failed: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde::Serialize;

    const SECRET: &str = "test-secret";

    #[derive(Serialize)]
    struct TestClaims<'a> {
        sub: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        role: Option<&'a str>,
        exp: u64,
    }

    fn token(sub: &str, role: Option<&str>, exp_offset: i64) -> String {
        let exp = (chrono::Utc::now().timestamp() + exp_offset) as u64;
        encode(
            &Header::default(),
            &TestClaims { sub, role, exp },
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn should_decode_regular_user() {
        let requester = decode_requester(&token("42", None, 3600), &JwtKeys::from_secret(SECRET))
            .unwrap();

        assert_eq!(requester.user_id.as_str(), "42");
        assert!(!requester.is_admin);
    }

    #[test]
    fn should_flag_admin_role() {
        let requester = decode_requester(
            &token("7", Some("admin"), 3600),
            &JwtKeys::from_secret(SECRET),
        )
        .unwrap();

        assert!(requester.is_admin);
    }

    #[test]
    fn should_not_flag_other_roles_as_admin() {
        let requester = decode_requester(
            &token("7", Some("user"), 3600),
            &JwtKeys::from_secret(SECRET),
        )
        .unwrap();

        assert!(!requester.is_admin);
    }

    #[test]
    fn should_reject_token_signed_with_other_secret() {
        let result = decode_requester(
            &token("42", None, 3600),
            &JwtKeys::from_secret("another-secret"),
        );

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn should_reject_expired_token() {
        let result = decode_requester(&token("42", None, -3600), &JwtKeys::from_secret(SECRET));

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn should_reject_malformed_token() {
        let result = decode_requester("not-a-jwt", &JwtKeys::from_secret(SECRET));

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn should_reject_empty_subject() {
        let result = decode_requester(&token("", None, 3600), &JwtKeys::from_secret(SECRET));

        assert!(matches!(result, Err(AuthError::EmptySubject)));
    }
}
