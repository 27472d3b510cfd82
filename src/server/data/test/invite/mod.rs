use crate::server::{data::invite::InviteRepository, model::member::MemberRole};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod mark_accepted;
