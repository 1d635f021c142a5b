pub mod app_user;
pub mod quiz;
pub mod teacher;

pub use app_user::{AppUser, Role};
pub use quiz::Quiz;
pub use teacher::Teacher;
