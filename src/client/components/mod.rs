pub mod alert;
pub mod confirm;
pub mod layout;
pub mod navbar;
pub mod page;
pub mod thumbnail;
pub mod title;

pub use alert::StatusAlert;
pub use confirm::ConfirmDialog;
pub use layout::AuthLayout;
pub use navbar::AuthNavbar;
pub use page::Page;
pub use thumbnail::ImagePreview;
pub use title::HealCheckTitleButton;
