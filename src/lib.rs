// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # mpi-datatype — C++ primitive type → MPI constant mapping
//!
//! Maps canonical C++ primitive-type spellings to the datatype constants of
//! the MPI C++ bindings, for use by typemap code generators.
//!
//! Two pieces:
//!
//! - [`Datatype`]: a fixed, enumerable table from curated spellings
//!   (`"unsigned long"`, `"signed char"`, ...) to constants
//!   (`"MPI::UNSIGNED_LONG"`, `"MPI::SIGNED_CHAR"`, ...). Unknown spellings
//!   look up as `None` — never a guess.
//! - [`Datatype::cpp_to_mpi`]: a pure conversion applying the MPI naming
//!   convention (uppercase, `MPI::`-prefixed) to any identifier, known or
//!   not.
//!
//! ## Quick Start
//!
//! ```rust
//! use mpi_datatype::Datatype;
//!
//! let datatype = Datatype::new();
//! assert_eq!(datatype.lookup("unsigned long"), Some("MPI::UNSIGNED_LONG"));
//! assert_eq!(datatype.lookup("foo"), None);
//!
//! // Names outside the curated vocabulary still get a constant name:
//! assert_eq!(Datatype::cpp_to_mpi("FooBar"), "MPI::FOOBAR");
//! ```
//!
//! The intended caller is a code generator: `lookup` for every primitive
//! member it encounters, `cpp_to_mpi` as the fallback when emitting a
//! constant for a user-defined type. That generator is not part of this
//! crate.

pub mod datatype;
pub mod error;

// Re-exports
pub use datatype::{Datatype, DatatypeEntry, MPI_NAMESPACE, MPI_SEPARATOR};
pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
