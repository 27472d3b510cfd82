use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
    model::member::MemberRole,
};
use test_utils::{builder::TestBuilder, factory};

mod auth;
