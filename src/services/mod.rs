//! Service layer between HTTP routes and contract queries.

pub mod collection;
