//! Routed page views.

mod contact;
mod history;
mod home;
mod projects;

pub use contact::Contact;
pub use history::History;
pub use home::Home;
pub use projects::Projects;
