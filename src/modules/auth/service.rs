use srms_auth::{TokenClaims, peek_claims};
use srms_core::{AuthError, SessionError};
use srms_models::Role;
use tracing::{info, instrument, warn};

use crate::client::ApiClient;

/// Login flow. The only writer of the session token.
#[derive(Clone, Debug)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchanges credentials for a session token and stores it.
    ///
    /// Any token from an earlier session is cleared before the login request
    /// is sent, so a rejected or failed attempt leaves the session empty
    /// rather than holding a possibly revoked credential.
    ///
    /// The role comes from the response body when present, otherwise from
    /// the token claims.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Rejected`] when the server refuses the credentials
    /// - [`AuthError::MissingRole`] when no role can be determined; no token is stored
    /// - [`AuthError::Api`] for transport faults and undecodable responses
    /// - [`AuthError::Session`] when the session cannot be persisted
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<Role, AuthError> {
        let session = self.client.session();
        session.clear()?;

        let Some(response) = self.client.login(username, password).await? else {
            return Err(AuthError::Rejected);
        };

        let role = response
            .role
            .or_else(|| peek_claims(&response.token).and_then(|claims| claims.role))
            .ok_or_else(|| {
                warn!("Login succeeded but no role was found in the response or token");
                AuthError::MissingRole
            })?;

        session.set_token(&response.token)?;
        info!(role = %role, "Signed in");

        Ok(role)
    }

    pub fn logout(&self) -> Result<(), SessionError> {
        self.client.session().clear()?;
        info!("Signed out");
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.session().is_authenticated()
    }

    /// Claims of the stored token, if it is a readable JWT.
    pub fn current_claims(&self) -> Option<TokenClaims> {
        self.client
            .session()
            .token()
            .and_then(|token| peek_claims(&token))
    }
}
