pub mod cars;
pub mod connection;
pub mod favorites;
pub mod leads;
pub mod news;
pub mod users;

pub use connection::Database;
