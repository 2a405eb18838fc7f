#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod auth;

#[cfg(feature = "web")]
pub mod history;

#[cfg(feature = "web")]
pub mod notification;

#[cfg(feature = "web")]
pub mod stats;
