use crate::server::{
    data::auction::AuctionRepository,
    model::{
        auction::{CreateAuctionParams, JoinMode, UpdateAuctionParams},
        member::MemberRole,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_for_user_paginated;
mod update;
