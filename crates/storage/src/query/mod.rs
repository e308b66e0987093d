//! Builders shared by the filter, sort and list queries of every entity.
//!
//! Every read goes through [`Criteria`]: optional predicates are ANDed onto
//! a `WHERE 1=1` base, ordering is resolved through a [`SortField`]
//! mapping, and pagination is always appended last.

mod criteria;
mod sort;

pub use criteria::Criteria;
pub use sort::{SortField, SortOrder};
