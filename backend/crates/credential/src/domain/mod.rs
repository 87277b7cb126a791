pub mod events;
pub mod gateway;
pub mod password;
pub mod policy;
pub mod rules;
pub mod validator;
