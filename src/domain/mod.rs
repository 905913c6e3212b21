pub mod catalog;
pub mod favorites;
pub mod format;
pub mod leads;
pub mod quote;
pub mod roles;
pub mod vehicle;
