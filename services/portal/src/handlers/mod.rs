pub mod admin;
pub mod auth;
pub mod portal;
pub mod projects;
pub mod visuals;
