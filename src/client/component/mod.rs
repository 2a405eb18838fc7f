pub mod header;
pub mod layout;
pub mod page;
pub mod protected_layout;
pub mod toast;

pub use header::Header;
pub use layout::Layout;
pub use page::Page;
pub use protected_layout::RequiresLoggedIn;
pub use toast::ToastHost;
