//! Assertion macros for fixture tests.
//!
//! - [`crate::assert_result_ok!`] - Assert Result is Ok and extract value
//! - [`crate::assert_result_err!`] - Assert Result is Err and extract error
//! - [`crate::assert_contains_error!`] - Assert error message contains pattern
//! - [`crate::assert_invalid_argument!`] - Assert an invalid-argument error for a parameter
//!
//! # Example
//!
//! ```rust,ignore
//! use analyzer_fixtures::{assert_result_ok, assert_result_err};
//!
//! let result: Result<i32, String> = Ok(42);
//! let value = assert_result_ok!(result);
//! assert_eq!(value, 42);
//!
//! let result: Result<i32, String> = Err("oops".to_string());
//! let err = assert_result_err!(result);
//! assert_eq!(err, "oops");
//! ```

/// Assert that a Result is Ok and extract the value.
///
/// If the Result is Err, panics with a message showing the error.
#[macro_export]
macro_rules! assert_result_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!(
                "Expected Ok, got Err: {:?}\n  at {}:{}:{}",
                e,
                file!(),
                line!(),
                column!()
            ),
        }
    };
    ($result:expr, $($msg:tt)+) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!(
                "{}: Expected Ok, got Err: {:?}\n  at {}:{}:{}",
                format!($($msg)+),
                e,
                file!(),
                line!(),
                column!()
            ),
        }
    };
}

/// Assert that a Result is Err and extract the error.
///
/// If the Result is Ok, panics with a message showing the value.
#[macro_export]
macro_rules! assert_result_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!(
                "Expected Err, got Ok: {:?}\n  at {}:{}:{}",
                value,
                file!(),
                line!(),
                column!()
            ),
            Err(e) => e,
        }
    };
    ($result:expr, $($msg:tt)+) => {
        match $result {
            Ok(value) => panic!(
                "{}: Expected Err, got Ok: {:?}\n  at {}:{}:{}",
                format!($($msg)+),
                value,
                file!(),
                line!(),
                column!()
            ),
            Err(e) => e,
        }
    };
}

/// Assert that an error message contains a specific pattern.
#[macro_export]
macro_rules! assert_contains_error {
    ($result:expr, $pattern:expr) => {{
        let err = $crate::assert_result_err!($result);
        let err_str = err.to_string();
        assert!(
            err_str.contains($pattern),
            "Error '{}' does not contain '{}'\n  at {}:{}:{}",
            err_str,
            $pattern,
            file!(),
            line!(),
            column!()
        );
        err
    }};
}

/// Assert that a Result failed with `FixtureError::InvalidArgument` naming `$parameter`.
///
/// Returns the error.
///
/// ```rust,ignore
/// let context = csharp_context("class C{}");
/// assert_invalid_argument!(context.in_assembly_named(""), "assembly_name");
/// ```
#[macro_export]
macro_rules! assert_invalid_argument {
    ($result:expr, $parameter:expr) => {{
        let err = $crate::assert_result_err!($result);
        assert!(
            matches!(err, $crate::errors::FixtureError::InvalidArgument { .. }),
            "Expected InvalidArgument, got {:?}\n  at {}:{}:{}",
            err,
            file!(),
            line!(),
            column!()
        );
        assert_eq!(
            err.parameter(),
            Some($parameter),
            "Wrong parameter in {:?}\n  at {}:{}:{}",
            err,
            file!(),
            line!(),
            column!()
        );
        err
    }};
}
