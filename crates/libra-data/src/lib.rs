// Operations
mod operations;
pub use operations::*;

mod errors;
pub use errors::*;

// Models
mod members;
pub use members::*;

mod transactions;
pub use transactions::*;

mod users;
pub use users::*;

mod reports;
pub use reports::*;

// Utilities
pub mod datetime;
pub mod formatting;
pub mod pagination;
