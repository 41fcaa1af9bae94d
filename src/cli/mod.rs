pub mod app;
pub mod commands;

pub use app::{Cli, Commands};

use anyhow::Result;

use crate::api::SurveyClient;
use crate::config::Config;
use crate::session::{Session, SessionStore};

/// Context threaded into every command handler: configuration plus the
/// session store. Built once in `main`, never global.
pub struct AppContext {
    pub config: Config,
    pub sessions: SessionStore,
}

impl AppContext {
    /// Client without credentials, for the public respondent flow.
    pub fn public_client(&self) -> SurveyClient {
        SurveyClient::new(self.config.base_url.clone(), None)
    }

    /// Client carrying the stored bearer token. Fails when logged out, which
    /// is the only gate protected commands have; an expired token is
    /// discovered when the API call itself fails.
    pub fn authed_client(&self) -> Result<(Session, SurveyClient)> {
        let session = self.sessions.require()?;
        let client = SurveyClient::new(self.config.base_url.clone(), Some(session.token.clone()));
        Ok((session, client))
    }
}
