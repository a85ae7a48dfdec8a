//! Write operations over the precinct schema.
//!
//! Every function returns the affected-row count as reported by the server.
//! Zero is a normal result, not an error: deleting a missing tag or updating
//! an unknown case simply touches nothing. Constraint violations come back
//! as `DbError::Update`.

use crate::db::{DbError, Session};

use super::catalog::{self, STATUS_OPEN};

/// Log a piece of evidence against a case.
pub fn insert_evidence(
    session: &mut Session,
    case_id: i64,
    tag: &str,
    description: &str,
    location: &str,
    badge: i64,
) -> Result<u64, DbError> {
    catalog::INSERT_EVIDENCE
        .bind(vec![
            case_id.into(),
            tag.into(),
            description.into(),
            badge.into(),
            location.into(),
        ])?
        .update(session)
}

pub fn update_case_status(session: &mut Session, case_id: i64, status: &str) -> Result<u64, DbError> {
    catalog::UPDATE_CASE_STATUS
        .bind(vec![status.into(), case_id.into()])?
        .update(session)
}

pub fn delete_resource(session: &mut Session, asset_tag: &str) -> Result<u64, DbError> {
    catalog::DELETE_RESOURCE.bind(vec![asset_tag.into()])?.update(session)
}

/// Open a new case. The status is always `Open`.
pub fn create_new_case(session: &mut Session, case_id: i64, title: &str) -> Result<u64, DbError> {
    catalog::CREATE_NEW_CASE
        .bind(vec![case_id.into(), title.into(), STATUS_OPEN.into()])?
        .update(session)
}

pub fn assign_detective(session: &mut Session, badge: i64, case_id: i64) -> Result<u64, DbError> {
    catalog::ASSIGN_DETECTIVE
        .bind(vec![badge.into(), case_id.into()])?
        .update(session)
}

pub fn add_person_of_interest(
    session: &mut Session,
    person_id: i64,
    name: &str,
    poi_type: &str,
) -> Result<u64, DbError> {
    catalog::ADD_PERSON_OF_INTEREST
        .bind(vec![person_id.into(), name.into(), poi_type.into()])?
        .update(session)
}

/// Record perpetrator details for an existing person of interest.
///
/// Fails with `DbError::Update` if `person_id` does not exist.
pub fn add_perpetrator_details(
    session: &mut Session,
    perp_id: i64,
    person_id: i64,
    alias: &str,
) -> Result<u64, DbError> {
    catalog::ADD_PERPETRATOR_DETAILS
        .bind(vec![perp_id.into(), person_id.into(), alias.into()])?
        .update(session)
}

pub fn promote_detective(session: &mut Session, badge: i64, new_rank: &str) -> Result<u64, DbError> {
    catalog::PROMOTE_DETECTIVE
        .bind(vec![new_rank.into(), badge.into()])?
        .update(session)
}

pub fn transfer_detective(session: &mut Session, badge: i64, squad_id: i64) -> Result<u64, DbError> {
    catalog::TRANSFER_DETECTIVE
        .bind(vec![squad_id.into(), badge.into()])?
        .update(session)
}

pub fn delete_evidence(session: &mut Session, tag: &str) -> Result<u64, DbError> {
    catalog::DELETE_EVIDENCE.bind(vec![tag.into()])?.update(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::SqlValue;
    use crate::test_utils::mock_session;

    #[test]
    fn test_insert_evidence_argument_order() {
        let (mut session, connector, _dir) = mock_session();
        connector.set_affected(1);

        let affected = insert_evidence(&mut session, 500, "EV-500", "Cheap sunglasses", "Locker 9", 9544).unwrap();
        assert_eq!(affected, 1);

        let executed = connector.executed();
        assert_eq!(executed[0].sql, catalog::INSERT_EVIDENCE.template);
        assert_eq!(
            executed[0].params,
            vec![
                SqlValue::Int(500),
                SqlValue::from("EV-500"),
                SqlValue::from("Cheap sunglasses"),
                SqlValue::Int(9544),
                SqlValue::from("Locker 9"),
            ]
        );
    }

    #[test]
    fn test_create_new_case_is_open() {
        let (mut session, connector, _dir) = mock_session();
        create_new_case(&mut session, 501, "The Pontiac Bandit Returns").unwrap();

        let params = &connector.executed()[0].params;
        assert_eq!(params[2], SqlValue::from("Open"));
    }

    #[test]
    fn test_update_binds_value_before_key() {
        let (mut session, connector, _dir) = mock_session();
        update_case_status(&mut session, 500, "Closed").unwrap();
        promote_detective(&mut session, 9544, "Sergeant").unwrap();
        transfer_detective(&mut session, 9544, 2).unwrap();

        let params: Vec<Vec<SqlValue>> = connector.executed().into_iter().map(|e| e.params).collect();
        assert_eq!(params[0], vec![SqlValue::from("Closed"), SqlValue::Int(500)]);
        assert_eq!(params[1], vec![SqlValue::from("Sergeant"), SqlValue::Int(9544)]);
        assert_eq!(params[2], vec![SqlValue::Int(2), SqlValue::Int(9544)]);
    }

    #[test]
    fn test_delete_missing_row_is_zero_not_error() {
        let (mut session, connector, _dir) = mock_session();
        connector.set_affected(0);
        assert_eq!(delete_resource(&mut session, "NOPE-000").unwrap(), 0);
        assert_eq!(delete_evidence(&mut session, "NOPE-000").unwrap(), 0);
    }

    #[test]
    fn test_foreign_key_violation_is_update_error() {
        let (mut session, connector, _dir) = mock_session();
        connector.fail_next("insert or update on table \"perpetrator\" violates foreign key constraint");

        let err = add_perpetrator_details(&mut session, 77, 999_999, "The Ghost").unwrap_err();
        assert!(matches!(err, DbError::Update { .. }));
        assert!(err.to_string().starts_with("Update Error:"));
    }

    #[test]
    fn test_writes_are_audited_with_rendered_arguments() {
        let (mut session, _connector, _dir) = mock_session();
        assign_detective(&mut session, 9544, 500).unwrap();
        add_person_of_interest(&mut session, 42, "Doug Judy", "Suspect").unwrap();

        let entries = session.audit_log().entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0].statement,
            "INSERT INTO Assigned_To (badge_no, case_id) VALUES (9544, 500)"
        );
        assert!(entries[1].statement.ends_with("VALUES (42, 'Doug Judy', 'Suspect')"));
    }
}
