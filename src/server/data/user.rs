use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use chrono::Utc;

use crate::server::model::user::OAuthUserInfo;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or refreshes a user from provider userinfo.
    ///
    /// Matched on the OAuth subject. Profile fields are refreshed on every
    /// login; the admin flag is only ever raised here, never lowered, so a
    /// removed `ADMIN_EMAILS` entry requires an explicit admin revoke.
    pub async fn upsert(
        &self,
        info: &OAuthUserInfo,
        admin: bool,
    ) -> Result<entity::user::Model, DbErr> {
        let existing = entity::prelude::User::find()
            .filter(entity::user::Column::Subject.eq(&info.sub))
            .one(self.db)
            .await?;

        match existing {
            Some(user) => {
                let keep_admin = user.admin || admin;
                let mut active: entity::user::ActiveModel = user.into();
                active.email = ActiveValue::Set(info.email.clone());
                active.name = ActiveValue::Set(info.name.clone());
                active.avatar_url = ActiveValue::Set(info.picture.clone());
                active.admin = ActiveValue::Set(keep_admin);
                active.update(self.db).await
            }
            None => {
                entity::user::ActiveModel {
                    id: ActiveValue::NotSet,
                    subject: ActiveValue::Set(info.sub.clone()),
                    email: ActiveValue::Set(info.email.clone()),
                    name: ActiveValue::Set(info.name.clone()),
                    avatar_url: ActiveValue::Set(info.picture.clone()),
                    admin: ActiveValue::Set(admin),
                    created_at: ActiveValue::Set(Utc::now()),
                }
                .insert(self.db)
                .await
            }
        }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Gets all users ordered by name, paginated.
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::user::Model>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator.fetch_page(page).await?;

        Ok((users, total))
    }

    /// Sets or clears the platform-admin flag.
    pub async fn set_admin(
        &self,
        id: i32,
        admin: bool,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.into();
        active.admin = ActiveValue::Set(admin);

        Ok(Some(active.update(self.db).await?))
    }
}
