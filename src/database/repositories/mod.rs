pub mod landlord;
pub mod property;
pub mod room;
pub mod tenant;

pub use landlord::LandlordRepository;
pub use property::PropertyRepository;
pub use room::RoomRepository;
pub use tenant::TenantRepository;
