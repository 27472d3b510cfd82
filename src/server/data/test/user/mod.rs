use crate::server::{data::user::UserRepository, model::user::OAuthUserInfo};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod get_all_paginated;
mod set_admin;
mod upsert;

fn userinfo(sub: &str, email: &str, name: &str) -> OAuthUserInfo {
    OAuthUserInfo {
        sub: sub.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        picture: None,
    }
}
