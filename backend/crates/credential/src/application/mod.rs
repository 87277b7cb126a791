pub mod config;
pub mod update_password;
