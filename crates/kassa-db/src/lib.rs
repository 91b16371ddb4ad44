
pub mod connection;
pub use connection::Connection;

pub mod results;
pub mod schema;

pub mod accounts;
pub mod expenses;
