mod message;
mod payout;
