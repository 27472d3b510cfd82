use crate::server::data::bid::BidRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::bid::BidFactory};

mod create;
mod get_by_item_paginated;
