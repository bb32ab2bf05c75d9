pub mod landlord;
pub mod property;
pub mod room;
pub mod tenant;

pub(crate) mod validate;
