pub mod assign;
pub mod list;
