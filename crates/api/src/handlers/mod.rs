pub mod admin;
pub mod auth;
pub mod lookup;
pub mod project;
pub mod sprint;
pub mod task;
