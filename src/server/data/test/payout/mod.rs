use crate::server::{data::payout::PayoutRepository, model::payout::CreatePayoutParam};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count;
mod create;
mod find_by_transaction_id;
mod get_recent;
mod search_by_recipient;
