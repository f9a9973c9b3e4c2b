pub mod auth;
pub mod common;
pub mod plan;
pub mod profile;
pub mod training;
pub mod user;
