//! Declarative macros for generating CLI parsing, execute and output tests.
//!
//! Instead of writing repetitive test functions, declare the test cases and
//! let the macro generate the actual test code. Expansion sites need `Args`,
//! `clap::Parser` and `rstest::rstest` in scope.

/// Generate a test that a command parses into the expected variant.
#[macro_export]
macro_rules! cli_parses_test {
    (
        command: $cmd:literal,
        variant: $variant:ident,
        test_name: $test_name:ident $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let args = Args::try_parse_from(["precinct", $cmd]).unwrap();
            assert!(
                matches!(args.command, crate::commands::Command::$variant(_)),
                concat!("Expected ", stringify!($variant), " command")
            );
        }
    };
}

/// Generate a single CLI option test.
#[macro_export]
macro_rules! cli_option_test {
    (
        command: $cmd:literal,
        variant: $variant:ident,
        test_name: $test_name:ident,
        args: [$($arg:literal),+],
        field: $field:ident,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let args = Args::try_parse_from([
                "precinct",
                $cmd,
                $($arg),+
            ]).unwrap();
            match args.command {
                crate::commands::Command::$variant(cmd) => {
                    assert_eq!(cmd.$field, $expected,
                        concat!("Field ", stringify!($field), " mismatch"));
                }
                _ => panic!(concat!("Expected ", stringify!($variant), " command")),
            }
        }
    };
}

/// Generate limit validation tests (zero rejected, max exceeded rejected, default value).
#[macro_export]
macro_rules! cli_limit_tests {
    (
        command: $cmd:literal,
        variant: $variant:ident,
        limit: {
            field: $limit_field:ident,
            default: $limit_default:expr,
            max: $limit_max:expr $(,)?
        } $(,)?
    ) => {
        #[rstest]
        fn test_limit_default() {
            let args = Args::try_parse_from(["precinct", $cmd]).unwrap();
            match args.command {
                crate::commands::Command::$variant(cmd) => {
                    assert_eq!(cmd.$limit_field, $limit_default);
                }
                _ => panic!(concat!("Expected ", stringify!($variant), " command")),
            }
        }

        #[rstest]
        fn test_limit_zero_rejected() {
            let result = Args::try_parse_from(["precinct", $cmd, "--limit", "0"]);
            assert!(result.is_err(), "Limit of 0 should be rejected");
        }

        #[rstest]
        fn test_limit_exceeds_max_rejected() {
            let max_plus_one = ($limit_max + 1).to_string();
            let result = Args::try_parse_from(["precinct", $cmd, "--limit", &max_plus_one]);
            assert!(result.is_err(),
                concat!("Limit exceeding ", stringify!($limit_max), " should be rejected"));
        }
    };
}

/// Generate a test that verifies a command requires a specific argument.
///
/// # Example
///
/// ```ignore
/// cli_required_arg_test! {
///     command: "search-evidence",
///     test_name: test_requires_keyword,
///     required_arg: "--keyword",
/// }
/// ```
#[macro_export]
macro_rules! cli_required_arg_test {
    (
        command: $cmd:literal,
        test_name: $test_name:ident,
        required_arg: $arg:literal $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = Args::try_parse_from(["precinct", $cmd]);
            assert!(result.is_err(), concat!("Command should require ", $arg));
            assert!(
                result.unwrap_err().to_string().contains($arg),
                concat!("Error should mention ", $arg)
            );
        }
    };
}

/// Generate a test that verifies parsing fails with specific invalid args.
#[macro_export]
macro_rules! cli_error_test {
    (
        command: $cmd:literal,
        test_name: $test_name:ident,
        args: [$($arg:literal),+] $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = Args::try_parse_from([
                "precinct",
                $cmd,
                $($arg),+
            ]);
            assert!(result.is_err());
        }
    };
}

// =============================================================================
// Execute Test Macros
// =============================================================================

/// Generate a test that runs a command against a mock session.
///
/// `result:` optionally queues one canned `QueryResult` before the command
/// runs. The assertions closure receives the command output and the
/// `MockConnector`.
///
/// # Example
/// ```ignore
/// execute_test! {
///     test_name: test_case_load,
///     cmd: CaseLoadCmd {},
///     assertions: |result, connector| {
///         assert!(result.is_empty());
///     },
/// }
/// ```
#[macro_export]
macro_rules! execute_test {
    (
        test_name: $test_name:ident,
        $(result: $canned:expr,)?
        cmd: $cmd:expr,
        assertions: |$result:ident, $connector:ident| $body:block $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            use crate::commands::Execute;
            let (mut session, $connector, _dir) = crate::test_utils::mock_session();
            $( $connector.push_result($canned); )?
            let $result = $cmd.execute(&mut session).expect("Execute should succeed");
            $body
        }
    };
}

/// Generate a test that verifies a failing statement surfaces as an error.
#[macro_export]
macro_rules! execute_error_test {
    (
        test_name: $test_name:ident,
        server_error: $message:literal,
        cmd: $cmd:expr,
        contains: $needle:literal $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            use crate::commands::Execute;
            let (mut session, connector, _dir) = crate::test_utils::mock_session();
            connector.fail_next($message);
            let err = $cmd.execute(&mut session).unwrap_err();
            assert!(err.to_string().contains($needle),
                "Error '{}' should contain '{}'", err, $needle);
        }
    };
}

// =============================================================================
// Output Test Macros
// =============================================================================

/// Generate a test that verifies table output matches expected string.
///
/// Works with rstest fixtures by accepting a fixture parameter.
#[macro_export]
macro_rules! output_table_test {
    // With format parameter (Json, Toon)
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        expected: $expected:expr,
        format: $format:ident $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            assert_eq!($fixture.format(OutputFormat::$format), $expected);
        }
    };
    // Default table format
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::Outputable;
            assert_eq!($fixture.to_table(), $expected);
        }
    };
}

/// Generate a test that verifies table output contains expected strings.
///
/// Use this when exact string matching is too brittle.
#[macro_export]
macro_rules! output_table_contains_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        contains: [$($needle:literal),* $(,)?] $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::Outputable;
            let output = $fixture.to_table();
            $(
                assert!(output.contains($needle), concat!("Table output should contain: ", $needle));
            )*
        }
    };
}

/// Generate a test that verifies JSON output is valid and contains expected fields.
#[macro_export]
macro_rules! output_json_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        assertions: { $($field:literal : $expected:expr),* $(,)? } $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            let output = $fixture.format(OutputFormat::Json);
            let parsed: serde_json::Value = serde_json::from_str(&output)
                .expect("Should produce valid JSON");
            $(
                assert_eq!(parsed[$field], $expected, concat!("JSON field mismatch: ", $field));
            )*
        }
    };
}

/// Generate a test that verifies Toon output contains expected strings.
#[macro_export]
macro_rules! output_toon_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        contains: [$($needle:literal),* $(,)?] $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            let output = $fixture.format(OutputFormat::Toon);
            $(
                assert!(output.contains($needle), concat!("Toon output should contain: ", $needle));
            )*
        }
    };
}
