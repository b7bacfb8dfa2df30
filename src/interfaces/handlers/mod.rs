pub mod auth;
pub mod catalog;
pub mod engagement;
pub mod flash;
pub mod home;
pub mod notifications;
pub mod profiles;
pub mod projects;
pub mod ratings;
pub mod system;
pub mod tasks;
pub mod users;
