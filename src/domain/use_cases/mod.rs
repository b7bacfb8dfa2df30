pub mod auth;
pub mod catalog;
pub mod engagement;
pub mod notification;
pub mod profile;
pub mod project;
pub mod rating;
pub mod task;
