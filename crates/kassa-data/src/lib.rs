// Operations
mod operations;
pub use operations::*;

// Models
mod accounts;
pub use accounts::*;

mod expenses;
pub use expenses::*;

// Ingestion validation
mod validate;
pub use validate::*;

mod passwords;
pub use passwords::*;
