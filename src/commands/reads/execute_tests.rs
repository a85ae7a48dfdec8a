//! Execute tests for read commands.

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::db::{QueryResult, SqlValue};
    use crate::queries::catalog;
    use rstest::rstest;

    fn heists() -> QueryResult {
        QueryResult {
            headers: vec!["heist_year".into(), "objective_item".into(), "winner".into()],
            rows: vec![
                vec![SqlValue::Int(2016), "Championship Belt".into(), "Amy Santiago".into()],
                vec![SqlValue::Int(2015), "Cummerbund".into(), "Raymond Holt".into()],
                vec![SqlValue::Int(2013), "Medal of Valor".into(), SqlValue::Null],
            ],
        }
    }

    crate::execute_test! {
        test_name: test_squad_roster_binds_wrapped_filter,
        cmd: SquadRosterCmd { squad: "99".to_string() },
        assertions: |result, connector| {
            assert!(result.is_empty());
            let executed = connector.executed();
            assert_eq!(executed[0].sql, catalog::SQUAD_ROSTER.template);
            assert_eq!(executed[0].params, vec![SqlValue::from("%99%")]);
        },
    }

    crate::execute_test! {
        test_name: test_heist_winners_keeps_server_order,
        result: heists(),
        cmd: HeistWinnersCmd {},
        assertions: |result, _connector| {
            assert_eq!(result.len(), 3);
            let years: Vec<_> = result.column("heist_year").into_iter().cloned().collect();
            assert_eq!(years, vec![SqlValue::Int(2016), SqlValue::Int(2015), SqlValue::Int(2013)]);
            assert_eq!(result.rows()[2].get("winner"), Some(&SqlValue::Null));
        },
    }

    crate::execute_test! {
        test_name: test_search_evidence_runs_catalog_statement,
        cmd: SearchEvidenceCmd { keyword: "Key".to_string() },
        assertions: |_result, connector| {
            let executed = connector.executed();
            assert_eq!(executed.len(), 1);
            assert_eq!(executed[0].sql, catalog::SEARCH_EVIDENCE.template);
        },
    }

    crate::execute_error_test! {
        test_name: test_unsolved_cases_query_error,
        server_error: "permission denied for table case_file",
        cmd: UnsolvedCasesCmd {},
        contains: "Query Error: permission denied",
    }

    #[rstest]
    fn test_connection_failure_is_reported() {
        use crate::commands::Execute;
        let (mut session, connector, _dir) = crate::test_utils::mock_session();
        connector.fail_connects("connection refused");

        let err = CaseLoadCmd {}.execute(&mut session).unwrap_err();
        assert!(err.to_string().starts_with("Connection failed:"));
    }
}
