pub mod badge;
pub mod bottom_nav;
pub mod button;
pub mod card;
pub mod dialog;
pub mod input;
pub mod label;
pub mod page_header;

pub use badge::*;
pub use bottom_nav::*;
pub use button::*;
pub use card::*;
pub use dialog::*;
pub use input::*;
pub use label::*;
pub use page_header::*;
