//! Shared test inputs and the property suite run against every [`list_sort::Sorter`].

pub mod patterns;
