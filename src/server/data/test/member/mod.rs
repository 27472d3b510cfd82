use crate::server::{data::member::MemberRepository, model::member::MemberRole};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_if_absent;
mod remove;
mod update_role;
