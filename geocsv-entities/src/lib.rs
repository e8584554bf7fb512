#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # geocsv-entities
//!
//! Reusable, agnostic domain entities for geocsv.
//!
//! The entities only contain generic functionality that does not reveal any
//! provider- or file-format-specific logic.

pub mod address;
pub mod geo;
pub mod table;
