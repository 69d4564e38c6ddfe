//! Column statistics over the well-formed rows of a table.

pub mod regexes;
pub mod statistics;
pub mod type_detection;
