pub mod availability;
pub mod create;
pub mod delete;
pub mod list;
pub mod make_available;
pub mod rent;
pub mod show;
pub mod update_price;
