pub mod choices;
pub mod engagement;
pub mod language;
pub mod notification;
pub mod option_fields;
pub mod profile;
pub mod project;
pub mod rating;
pub mod skill;
pub mod task;
pub mod user;
pub mod validation;
