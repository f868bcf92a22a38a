pub mod assets;
pub mod auth;
pub mod guests;
pub mod rbac;
pub mod reservations;
pub mod rooms;
pub mod settings;
