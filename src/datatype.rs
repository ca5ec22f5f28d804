//! The C++ primitive → MPI datatype mapping
//!
//! A `Datatype` holds the curated table mapping canonical C++ primitive-type
//! spellings (e.g. `"unsigned long"`) to the matching constant of the MPI
//! C++ bindings (e.g. `"MPI::UNSIGNED_LONG"`). The table is built once and
//! never mutated, so a `Datatype` is safe to share across threads.
//!
//! Spellings with an optional `int` suffix (`"long"` vs `"long int"`) map to
//! the same constant. Anything outside the curated vocabulary looks up as
//! `None` — callers that want a hard error use [`Datatype::require`].
//!
//! For names outside the vocabulary (user-defined types a generator still
//! has to emit a constant for), [`Datatype::cpp_to_mpi`] applies the MPI
//! naming convention to an arbitrary identifier.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Error, Result};

/// Namespace token of the MPI C++ bindings.
pub const MPI_NAMESPACE: &str = "MPI";

/// Scope separator between namespace and constant name.
pub const MPI_SEPARATOR: &str = "::";

/// Curated mapping, hand-authored against the MPI 2.2 C++ binding constants.
///
/// Keys are canonical spellings only: no pointers, no arrays, no cv
/// qualifiers. Signedness and the optional `int` suffix are spelled out
/// explicitly rather than normalized at lookup time.
const CPP_TO_MPI_TABLE: &[(&str, &str)] = &[
    ("char", "MPI::CHAR"),
    ("signed char", "MPI::SIGNED_CHAR"),
    ("unsigned char", "MPI::UNSIGNED_CHAR"),
    ("wchar_t", "MPI::WCHAR"),
    ("bool", "MPI::BOOL"),
    ("short", "MPI::SHORT"),
    ("short int", "MPI::SHORT"),
    ("unsigned short", "MPI::UNSIGNED_SHORT"),
    ("unsigned short int", "MPI::UNSIGNED_SHORT"),
    ("int", "MPI::INT"),
    ("signed", "MPI::INT"),
    ("signed int", "MPI::INT"),
    ("unsigned", "MPI::UNSIGNED"),
    ("unsigned int", "MPI::UNSIGNED"),
    ("long", "MPI::LONG"),
    ("long int", "MPI::LONG"),
    ("unsigned long", "MPI::UNSIGNED_LONG"),
    ("unsigned long int", "MPI::UNSIGNED_LONG"),
    ("long long", "MPI::LONG_LONG"),
    ("long long int", "MPI::LONG_LONG"),
    ("unsigned long long", "MPI::UNSIGNED_LONG_LONG"),
    ("unsigned long long int", "MPI::UNSIGNED_LONG_LONG"),
    ("float", "MPI::FLOAT"),
    ("double", "MPI::DOUBLE"),
    ("long double", "MPI::LONG_DOUBLE"),
];

/// One entry of the curated table, in serializable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatatypeEntry {
    /// Canonical C++ spelling
    pub cpp: &'static str,
    /// MPI constant name
    pub mpi: &'static str,
}

/// The type name mapper
#[derive(Debug, Clone)]
pub struct Datatype {
    entries: HashMap<&'static str, &'static str>,
}

impl Datatype {
    /// Build the mapper from the curated table.
    pub fn new() -> Self {
        Self {
            entries: CPP_TO_MPI_TABLE.iter().copied().collect(),
        }
    }

    /// Look up the MPI constant for a canonical C++ spelling.
    ///
    /// Returns `None` for anything outside the curated vocabulary; never
    /// guesses and never errors.
    ///
    /// # Examples
    /// ```
    /// use mpi_datatype::Datatype;
    /// let datatype = Datatype::new();
    /// assert_eq!(datatype.lookup("unsigned long"), Some("MPI::UNSIGNED_LONG"));
    /// assert_eq!(datatype.lookup("foo"), None);
    /// ```
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.entries.get(key).copied()
    }

    /// Like [`lookup`](Self::lookup), but an unknown spelling is an error.
    ///
    /// For callers that must not silently skip a type, e.g. a generator
    /// emitting a typemap for a fixed member list.
    pub fn require(&self, key: &str) -> Result<&'static str> {
        self.lookup(key)
            .ok_or_else(|| Error::UnknownType(key.to_string()))
    }

    /// Number of curated entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The table is never empty, but clippy wants the pair.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate all `(cpp spelling, mpi constant)` pairs. Order is not
    /// significant.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|(&k, &v)| (k, v))
    }

    /// Serializable snapshot of the table, sorted by C++ spelling so output
    /// is deterministic.
    pub fn entries_sorted(&self) -> Vec<DatatypeEntry> {
        let mut entries: Vec<_> = self
            .iter()
            .map(|(cpp, mpi)| DatatypeEntry { cpp, mpi })
            .collect();
        entries.sort_by_key(|e| e.cpp);
        entries
    }

    /// Convert an arbitrary identifier into the MPI naming convention.
    ///
    /// The rule is deliberately simple: uppercase the whole identifier and
    /// prefix the namespace. No word splitting, no underscore insertion.
    /// Defined for any non-empty input, known or not; does not consult the
    /// curated table.
    ///
    /// # Examples
    /// ```
    /// use mpi_datatype::Datatype;
    /// assert_eq!(Datatype::cpp_to_mpi("FooBar"), "MPI::FOOBAR");
    /// ```
    pub fn cpp_to_mpi(identifier: &str) -> String {
        format!(
            "{}{}{}",
            MPI_NAMESPACE,
            MPI_SEPARATOR,
            identifier.to_uppercase()
        )
    }
}

impl Default for Datatype {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // case 1: C++ name is passed verbosely
    #[test]
    fn test_char() {
        let datatype = Datatype::new();
        assert_eq!(datatype.lookup("char"), Some("MPI::CHAR"));
        assert_eq!(datatype.lookup("unsigned char"), Some("MPI::UNSIGNED_CHAR"));
        assert_eq!(datatype.lookup("signed char"), Some("MPI::SIGNED_CHAR"));
    }

    // case 2: special signed/unsigned handling
    #[test]
    fn test_int() {
        let datatype = Datatype::new();
        assert_eq!(datatype.lookup("int"), Some("MPI::INT"));
    }

    // case 3: signed/unsigned (see 2) and optional 'int' suffix
    #[test]
    fn test_long() {
        let datatype = Datatype::new();
        assert_eq!(datatype.lookup("long"), Some("MPI::LONG"));
        assert_eq!(datatype.lookup("unsigned long"), Some("MPI::UNSIGNED_LONG"));
    }

    #[test]
    fn test_lookup_unknown() {
        let datatype = Datatype::new();
        assert_eq!(datatype.lookup("foo"), None);
        assert_eq!(datatype.lookup("std::string"), None);
        assert_eq!(datatype.lookup(""), None);
    }

    #[test]
    fn test_nameconversion_unknown() {
        assert_eq!(Datatype::cpp_to_mpi("FooBar"), "MPI::FOOBAR");
    }

    #[test]
    fn test_map() {
        let datatype = Datatype::new();
        assert!(datatype.len() >= 14);
        for (key, value) in datatype.iter() {
            assert_eq!(datatype.lookup(key), Some(value));
        }
    }

    #[test]
    fn test_int_suffix_aliases_agree() {
        let datatype = Datatype::new();
        for (bare, suffixed) in [
            ("short", "short int"),
            ("long", "long int"),
            ("long long", "long long int"),
            ("unsigned short", "unsigned short int"),
            ("unsigned long", "unsigned long int"),
            ("unsigned long long", "unsigned long long int"),
        ] {
            assert_eq!(datatype.lookup(bare), datatype.lookup(suffixed));
        }
    }

    #[test]
    fn test_require() {
        let datatype = Datatype::new();
        assert_eq!(datatype.require("double").unwrap(), "MPI::DOUBLE");
        let err = datatype.require("foo").unwrap_err();
        assert!(matches!(err, Error::UnknownType(ref s) if s == "foo"));
    }

    #[test]
    fn test_entries_sorted_is_deterministic() {
        let datatype = Datatype::new();
        let a = datatype.entries_sorted();
        let b = datatype.entries_sorted();
        assert_eq!(a, b);
        assert_eq!(a.len(), datatype.len());
        assert!(a.windows(2).all(|w| w[0].cpp < w[1].cpp));
    }
}
