pub mod landlord;
pub mod property;
pub mod room;
pub mod tenant;

pub use landlord::Landlord;
pub use property::Property;
pub use room::{Room, RoomStatus, RoomType};
pub use tenant::Tenant;
