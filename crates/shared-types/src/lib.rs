pub mod bookings;
pub mod config;
pub mod error;
pub mod forms;
pub mod inventory;
pub mod layout;
pub mod nav;
pub mod patients;
pub mod pharmacy;
pub mod role;
pub mod route_table;
pub mod session;
pub mod splash;
pub mod vitals;

pub use config::*;
pub use error::*;
pub use forms::*;
pub use layout::*;
pub use nav::*;
pub use role::*;
pub use route_table::*;
pub use session::*;
pub use splash::*;
