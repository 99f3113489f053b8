use crate::entities::user;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct QueryUserService;

impl QueryUserService {
    pub async fn get_user(
        db: &DatabaseConnection,
        username: &str,
    ) -> Result<Option<user::Model>, DbErr> {
        user::Entity::find_by_id(username.to_string()).one(db).await
    }
}
