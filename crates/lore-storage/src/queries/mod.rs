pub mod access;
pub mod aggregation;
pub mod memory_crud;
pub mod memory_query;
pub mod memory_search;
