
/// CRUD operations tests for the report entity
pub mod crud_tests;
