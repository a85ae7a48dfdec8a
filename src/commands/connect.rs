//! `precinct connect`: open a connection and report the outcome.

use clap::Args;
use serde::Serialize;
use std::error::Error;

use crate::commands::Execute;
use crate::db::Session;
use crate::output::Outputable;

#[derive(Args, Debug)]
pub struct ConnectCmd {}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectionStatus {
    pub target: String,
    pub message: String,
}

impl Execute for ConnectCmd {
    type Output = ConnectionStatus;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        let message = session.connect()?;
        Ok(ConnectionStatus {
            target: session.config().describe(),
            message,
        })
    }
}

impl Outputable for ConnectionStatus {
    fn to_table(&self) -> String {
        self.message.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::ConnectionState;
    use crate::test_utils::mock_session;
    use rstest::rstest;

    #[rstest]
    fn test_connect_reports_target() {
        let (mut session, _connector, _dir) = mock_session();
        let status = ConnectCmd {}.execute(&mut session).unwrap();
        assert_eq!(status.target, "detective@localhost:5432/mini_world_db");
        assert_eq!(
            status.to_table(),
            "Connected successfully to detective@localhost:5432/mini_world_db."
        );
        assert_eq!(session.state(), ConnectionState::Connected);
    }

    #[rstest]
    fn test_connect_failure() {
        let (mut session, connector, _dir) = mock_session();
        connector.fail_connects("no pg_hba.conf entry for host");

        let err = ConnectCmd {}.execute(&mut session).unwrap_err();
        assert!(err.to_string().contains("no pg_hba.conf entry"));
    }
}
