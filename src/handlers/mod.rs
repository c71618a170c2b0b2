pub mod generate;
pub mod home;
pub mod support;
