//! Authentication endpoints.

use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::gateway::HttpGateway;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Debug, Deserialize)]
struct MeResponse {
    roles: Vec<String>,
}

/// Client for the login/logout lifecycle.
///
/// This is the only place the session store is written: `login` stores the
/// bearer token on success and `logout` clears it. A rejected request
/// elsewhere never clears the session by itself.
#[derive(Clone)]
pub struct AuthClient {
    gateway: HttpGateway,
}

impl AuthClient {
    /// Create a new auth client.
    pub fn new(gateway: HttpGateway) -> Self {
        Self { gateway }
    }

    /// Log in and store the received token in the session.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let response: LoginResponse = self
            .gateway
            .post_json("/auth/login", &LoginRequest { username, password })
            .await?;

        self.gateway.session().set(response.token).await;
        Ok(())
    }

    /// Clear the session, returning to the anonymous state.
    pub async fn logout(&self) {
        self.gateway.session().clear().await;
    }

    /// Roles of the authenticated user, used by the shell for navigation.
    pub async fn roles(&self) -> Result<Vec<String>, ApiError> {
        let response: MeResponse = self.gateway.get_json("/auth/me", &[]).await?;
        Ok(response.roles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_wire_shape() {
        let body = LoginRequest {
            username: "ops",
            password: "secret",
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"username":"ops","password":"secret"}"#);
    }

    #[test]
    fn login_response_parses() {
        let response: LoginResponse = serde_json::from_str(r#"{"token":"abc.def"}"#).unwrap();
        assert_eq!(response.token, "abc.def");
    }
}
