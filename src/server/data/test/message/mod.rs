use crate::server::{data::message::MessageRepository, model::message::MessageKind};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count;
mod create;
mod get_recent;
