/**
 * Identity Middleware
 *
 * Resolves an optional `Authorization: Bearer <token>` header into a
 * request principal and attaches it to the request extensions. The
 * middleware never rejects: an absent, malformed, or expired token simply
 * yields an anonymous principal, and each handler decides what identity
 * it requires.
 *
 * Note: the only handler that currently requires a principal is
 * `/api/auth/me`. Mutations accept a caller-supplied owner id without
 * checking it against the authenticated identity; the plumbing is in
 * place, the gate is a product decision.
 */
use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::verify_token;

/// The identity attached to every request.
#[derive(Clone, Debug, PartialEq)]
pub enum Principal {
    /// A verified bearer token was presented
    Authenticated { user_id: Uuid, email: String },
    /// No token, or a token that failed verification
    Anonymous,
}

impl Principal {
    /// The authenticated user ID, if any.
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            Self::Authenticated { user_id, .. } => Some(*user_id),
            Self::Anonymous => None,
        }
    }
}

/// Resolve an Authorization header value into a principal.
///
/// Anything short of a verifiable `Bearer <token>` is anonymous.
pub fn principal_from_header(header: Option<&str>) -> Principal {
    let Some(value) = header else {
        return Principal::Anonymous;
    };

    let Some(token) = value.strip_prefix("Bearer ") else {
        tracing::warn!("authorization header without bearer scheme");
        return Principal::Anonymous;
    };

    match verify_token(token) {
        Ok(claims) => match Uuid::parse_str(&claims.sub) {
            Ok(user_id) => Principal::Authenticated {
                user_id,
                email: claims.email,
            },
            Err(_) => {
                tracing::warn!("token subject is not a UUID");
                Principal::Anonymous
            }
        },
        Err(e) => {
            tracing::warn!("token verification failed: {:?}", e);
            Principal::Anonymous
        }
    }
}

/// Identity middleware
///
/// Attaches a `Principal` to every request's extensions. Handlers read it
/// through the `CurrentPrincipal` extractor.
pub async fn identity_middleware(mut request: Request, next: Next) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(str::to_owned);

    let principal = principal_from_header(header.as_deref());
    if let Principal::Authenticated { user_id, .. } = &principal {
        tracing::debug!("request authenticated as {}", user_id);
    }

    request.extensions_mut().insert(principal);
    next.run(request).await
}

/// Extractor for the request principal.
///
/// Falls back to anonymous when the middleware did not run, so extraction
/// itself never fails.
#[derive(Clone, Debug)]
pub struct CurrentPrincipal(pub Principal);

impl<S> axum::extract::FromRequestParts<S> for CurrentPrincipal
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let principal = parts
            .extensions
            .get::<Principal>()
            .cloned()
            .unwrap_or(Principal::Anonymous);
        Ok(CurrentPrincipal(principal))
    }
}
