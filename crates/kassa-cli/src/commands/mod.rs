mod accounts;
pub use accounts::*;

mod expenses;
pub use expenses::*;

mod reports;
pub use reports::*;
