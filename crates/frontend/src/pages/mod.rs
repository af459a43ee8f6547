pub mod about;
pub mod catalog;
pub mod contacts;
pub mod home;
