mod members;
pub use members::*;

mod report;
pub use report::*;

mod server;
pub use server::*;

mod transactions;
pub use transactions::*;

mod users;
pub use users::*;
