use std::error::Error;

use super::{DescribeCmd, InspectCmd, TablesCmd};
use crate::commands::Execute;
use crate::db::Session;
use crate::queries::inspect::{describe_table, list_tables, resolve_table, select_all};
use crate::types::TabularResult;

impl Execute for TablesCmd {
    type Output = TabularResult;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        Ok(list_tables(session)?)
    }
}

impl Execute for DescribeCmd {
    type Output = TabularResult;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        let table = resolve_table(session, &self.table)?;
        Ok(describe_table(session, &table)?)
    }
}

impl Execute for InspectCmd {
    type Output = TabularResult;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        let table = resolve_table(session, &self.table)?;
        Ok(select_all(session, &table)?)
    }
}
