use crate::server::{
    data::item::ItemRepository,
    model::bid::ApplyBidParams,
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::auction_item::ItemFactory};

mod apply_bid;
mod close;
mod get_by_auction_paginated;
