//! Value object trait: equality by value, not identity.
//!
//! Inventory records carry no identifier. Two records with the same fields are
//! the same record, and a record read back from disk is a fresh value that
//! compares equal to the one written.

/// Marker trait for value objects.
///
/// Value objects are **immutable by convention** and **compared by value**.
/// To "modify" one, build a new value with the changed fields.
///
/// The trait requires:
/// - **Clone**: values are copied freely between queries and views
/// - **PartialEq**: equality is structural, field by field
/// - **Debug**: values show up in logs and assertion failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Shelf {
///     aisle: u8,
///     level: u8,
/// }
///
/// impl ValueObject for Shelf {}
///
/// assert_eq!(Shelf { aisle: 3, level: 1 }, Shelf { aisle: 3, level: 1 });
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
