//! The fixed statement catalog.
//!
//! Each entry is a `StatementDescriptor`: a name, a template with `$n`
//! placeholders, the number of arguments it takes and whether it reads or
//! writes. Descriptors are `'static` and looked up by name; binding checks
//! arity and kind before anything reaches the server.

use std::fmt;

use crate::db::{DbError, Session, SqlValue};
use crate::types::{Outcome, TabularResult, UpdateOutcome};

/// Status given to newly opened cases.
pub const STATUS_OPEN: &str = "Open";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Read,
    Write,
}

impl StatementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementKind::Read => "read",
            StatementKind::Write => "write",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementDescriptor {
    pub name: &'static str,
    pub template: &'static str,
    pub arity: usize,
    pub kind: StatementKind,
}

impl StatementDescriptor {
    /// Attach arguments for one invocation.
    pub fn bind(&'static self, args: Vec<SqlValue>) -> Result<BoundStatement, DbError> {
        if args.len() != self.arity {
            return Err(DbError::ArgumentCount {
                name: self.name.to_string(),
                expected: self.arity,
                actual: args.len(),
            });
        }
        Ok(BoundStatement {
            descriptor: self,
            args,
        })
    }
}

/// A descriptor plus the arguments of a single call. Consumed when run.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundStatement {
    descriptor: &'static StatementDescriptor,
    args: Vec<SqlValue>,
}

impl BoundStatement {
    pub fn descriptor(&self) -> &'static StatementDescriptor {
        self.descriptor
    }

    pub fn args(&self) -> &[SqlValue] {
        &self.args
    }

    pub fn query(self, session: &mut Session) -> Result<TabularResult, DbError> {
        self.expect_kind(StatementKind::Read)?;
        session.run_query(self.descriptor.template, &self.args)
    }

    pub fn update(self, session: &mut Session) -> Result<u64, DbError> {
        self.expect_kind(StatementKind::Write)?;
        session.run_update(self.descriptor.template, &self.args)
    }

    /// Run according to the descriptor's kind.
    pub fn run(self, session: &mut Session) -> Result<Outcome, DbError> {
        match self.descriptor.kind {
            StatementKind::Read => self.query(session).map(Outcome::Rows),
            StatementKind::Write => {
                let operation = self.descriptor.name.to_string();
                let affected_rows = self.update(session)?;
                Ok(Outcome::Affected(UpdateOutcome {
                    operation,
                    affected_rows,
                }))
            }
        }
    }

    fn expect_kind(&self, requested: StatementKind) -> Result<(), DbError> {
        if self.descriptor.kind == requested {
            Ok(())
        } else {
            Err(DbError::WrongKind {
                name: self.descriptor.name.to_string(),
                kind: self.descriptor.kind.as_str(),
                requested: requested.as_str(),
            })
        }
    }
}

/// Wrap a filter fragment for a "contains" match. An empty fragment matches everything.
pub fn contains_pattern(fragment: &str) -> String {
    format!("%{}%", fragment)
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

pub const SQUAD_ROSTER: StatementDescriptor = StatementDescriptor {
    name: "squad_roster",
    template: "
        SELECT d.badge_no, d.first_name, d.last_name, d.rank, s.squad_name, s.shift
        FROM Detective d
        JOIN Squad s ON d.squad_id = s.squad_id
        WHERE s.squad_name LIKE $1",
    arity: 1,
    kind: StatementKind::Read,
};

pub const CASE_LOAD: StatementDescriptor = StatementDescriptor {
    name: "case_load",
    template: "
        SELECT d.first_name, d.last_name, COUNT(a.case_id) AS active_cases
        FROM Detective d
        LEFT JOIN Assigned_To a ON d.badge_no = a.badge_no
        GROUP BY d.badge_no, d.first_name, d.last_name
        ORDER BY active_cases DESC",
    arity: 0,
    kind: StatementKind::Read,
};

pub const HEIST_WINNERS: StatementDescriptor = StatementDescriptor {
    name: "heist_winners",
    template: "
        SELECT h.heist_year, h.objective_item, d.first_name || ' ' || d.last_name AS winner
        FROM Halloween_Heist h
        LEFT JOIN Detective d ON h.winner_id = d.badge_no
        ORDER BY h.heist_year DESC",
    arity: 0,
    kind: StatementKind::Read,
};

pub const SEARCH_EVIDENCE: StatementDescriptor = StatementDescriptor {
    name: "search_evidence",
    template: "
        SELECT e.evidence_tag, e.description, e.storage_location, c.case_title
        FROM Evidence_Log e
        JOIN Case_File c ON e.case_id = c.case_id
        WHERE e.description LIKE $1",
    arity: 1,
    kind: StatementKind::Read,
};

pub const PERPETRATOR_NETWORK: StatementDescriptor = StatementDescriptor {
    name: "perpetrator_network",
    template: "
        SELECT p.primary_alias, poi.name AS real_name, a.associate_name
        FROM Perpetrator p
        JOIN Person_Of_Interest poi ON p.person_id = poi.person_id
        LEFT JOIN Perpetrator_Known_Associate a ON p.perp_id = a.perp_id",
    arity: 0,
    kind: StatementKind::Read,
};

pub const UNSOLVED_CASES: StatementDescriptor = StatementDescriptor {
    name: "unsolved_cases",
    template: "
        SELECT case_id, case_title, status
        FROM Case_File
        WHERE status IS DISTINCT FROM 'Closed'
        ORDER BY case_id",
    arity: 0,
    kind: StatementKind::Read,
};

pub const RESOURCE_CUSTODY: StatementDescriptor = StatementDescriptor {
    name: "resource_custody",
    template: "
        SELECT r.asset_tag, r.item_name, d.first_name || ' ' || d.last_name AS custodian, s.squad_name
        FROM Precinct_Resource r
        LEFT JOIN Detective d ON r.custodian_badge = d.badge_no
        LEFT JOIN Squad s ON d.squad_id = s.squad_id
        ORDER BY r.asset_tag",
    arity: 0,
    kind: StatementKind::Read,
};

pub const BETTING_HISTORY: StatementDescriptor = StatementDescriptor {
    name: "betting_history",
    template: "
        SELECT b.bet_id,
               ch.first_name || ' ' || ch.last_name AS challenger,
               df.first_name || ' ' || df.last_name AS defendant,
               b.wager, b.outcome
        FROM Bet b
        JOIN Detective ch ON b.challenger_id = ch.badge_no
        JOIN Detective df ON b.defendant_id = df.badge_no
        ORDER BY b.bet_id",
    arity: 0,
    kind: StatementKind::Read,
};

pub const INTERVIEW_LOGS: StatementDescriptor = StatementDescriptor {
    name: "interview_logs",
    template: "
        SELECT i.interview_id, i.interview_date,
               d.first_name || ' ' || d.last_name AS detective,
               p.primary_alias AS perpetrator_alias, i.summary
        FROM Interview i
        JOIN Detective d ON i.badge_no = d.badge_no
        JOIN Perpetrator p ON i.perp_id = p.perp_id
        ORDER BY i.interview_id",
    arity: 0,
    kind: StatementKind::Read,
};

pub const DETECTIVE_SPECIALIZATIONS: StatementDescriptor = StatementDescriptor {
    name: "detective_specializations",
    template: "
        SELECT d.badge_no, d.first_name || ' ' || d.last_name AS detective, ds.specialization
        FROM Detective d
        JOIN Detective_Specialization ds ON d.badge_no = ds.badge_no
        ORDER BY d.badge_no, ds.specialization",
    arity: 0,
    kind: StatementKind::Read,
};

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

pub const INSERT_EVIDENCE: StatementDescriptor = StatementDescriptor {
    name: "insert_evidence",
    template: "
        INSERT INTO Evidence_Log (case_id, evidence_tag, description, logged_by_id, storage_location)
        VALUES ($1, $2, $3, $4, $5)",
    arity: 5,
    kind: StatementKind::Write,
};

pub const UPDATE_CASE_STATUS: StatementDescriptor = StatementDescriptor {
    name: "update_case_status",
    template: "
        UPDATE Case_File
        SET status = $1
        WHERE case_id = $2",
    arity: 2,
    kind: StatementKind::Write,
};

pub const DELETE_RESOURCE: StatementDescriptor = StatementDescriptor {
    name: "delete_resource",
    template: "
        DELETE FROM Precinct_Resource
        WHERE asset_tag = $1",
    arity: 1,
    kind: StatementKind::Write,
};

pub const CREATE_NEW_CASE: StatementDescriptor = StatementDescriptor {
    name: "create_new_case",
    template: "
        INSERT INTO Case_File (case_id, case_title, status)
        VALUES ($1, $2, $3)",
    arity: 3,
    kind: StatementKind::Write,
};

pub const ASSIGN_DETECTIVE: StatementDescriptor = StatementDescriptor {
    name: "assign_detective",
    template: "
        INSERT INTO Assigned_To (badge_no, case_id)
        VALUES ($1, $2)",
    arity: 2,
    kind: StatementKind::Write,
};

pub const ADD_PERSON_OF_INTEREST: StatementDescriptor = StatementDescriptor {
    name: "add_person_of_interest",
    template: "
        INSERT INTO Person_Of_Interest (person_id, name, poi_type)
        VALUES ($1, $2, $3)",
    arity: 3,
    kind: StatementKind::Write,
};

pub const ADD_PERPETRATOR_DETAILS: StatementDescriptor = StatementDescriptor {
    name: "add_perpetrator_details",
    template: "
        INSERT INTO Perpetrator (perp_id, person_id, primary_alias)
        VALUES ($1, $2, $3)",
    arity: 3,
    kind: StatementKind::Write,
};

pub const PROMOTE_DETECTIVE: StatementDescriptor = StatementDescriptor {
    name: "promote_detective",
    template: "
        UPDATE Detective
        SET rank = $1
        WHERE badge_no = $2",
    arity: 2,
    kind: StatementKind::Write,
};

pub const TRANSFER_DETECTIVE: StatementDescriptor = StatementDescriptor {
    name: "transfer_detective",
    template: "
        UPDATE Detective
        SET squad_id = $1
        WHERE badge_no = $2",
    arity: 2,
    kind: StatementKind::Write,
};

pub const DELETE_EVIDENCE: StatementDescriptor = StatementDescriptor {
    name: "delete_evidence",
    template: "
        DELETE FROM Evidence_Log
        WHERE evidence_tag = $1",
    arity: 1,
    kind: StatementKind::Write,
};

/// Every catalog entry, reads first, in menu order.
pub static CATALOG: [&StatementDescriptor; 20] = [
    &SQUAD_ROSTER,
    &CASE_LOAD,
    &HEIST_WINNERS,
    &SEARCH_EVIDENCE,
    &PERPETRATOR_NETWORK,
    &UNSOLVED_CASES,
    &RESOURCE_CUSTODY,
    &BETTING_HISTORY,
    &INTERVIEW_LOGS,
    &DETECTIVE_SPECIALIZATIONS,
    &INSERT_EVIDENCE,
    &UPDATE_CASE_STATUS,
    &DELETE_RESOURCE,
    &CREATE_NEW_CASE,
    &ASSIGN_DETECTIVE,
    &ADD_PERSON_OF_INTEREST,
    &ADD_PERPETRATOR_DETAILS,
    &PROMOTE_DETECTIVE,
    &TRANSFER_DETECTIVE,
    &DELETE_EVIDENCE,
];

/// Find a catalog entry by name.
pub fn lookup(name: &str) -> Option<&'static StatementDescriptor> {
    CATALOG.iter().copied().find(|d| d.name == name)
}
