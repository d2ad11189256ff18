//! Testing infrastructure for fixture-based tests.
//!
//! - **Assertion macros**: `Result` assertions plus a check for invalid-argument
//!   errors naming a specific parameter
//! - **Helpers**: context factories for both language variants, formatting
//!   shortcuts and test logging setup
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use analyzer_fixtures::testkit::helpers::csharp_context;
//! use analyzer_fixtures::{assert_invalid_argument, assert_result_ok};
//!
//! #[test]
//! fn test_file_name_is_required() {
//!     let context = csharp_context("class C{}");
//!     assert_invalid_argument!(context.in_file_named(" "), "file_name");
//!     let renamed = assert_result_ok!(context.in_file_named("Program.cs"));
//!     assert_eq!(renamed.file_name(), "Program.cs");
//! }
//! ```

pub mod assertions;
pub mod helpers;

// Note: Assertion macros are exported at crate root via #[macro_export]
pub use helpers::{basic_context, context_for, csharp_context, format_context, init_test_logging};
