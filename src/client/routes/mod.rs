pub mod admin;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod register;

pub use admin::Admin;
pub use dashboard::Dashboard;
pub use login::Login;
pub use not_found::NotFound;
pub use register::Register;
