pub use super::message::Entity as Message;
pub use super::payout::Entity as Payout;
