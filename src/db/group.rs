use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, group::NewGroup};
use crate::utils::token::new_id;
use chrono::Utc;
use entity::group::{ActiveModel as GroupActive, Entity as Group, Model as GroupModel};
use entity::group_player::{ActiveModel as GroupPlayerActive, Entity as GroupPlayer};
use entity::user::Model as UserModel;
use sea_orm::{
    ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

impl PostgresService {
    /// Create a group and seed its membership with the master in the same
    /// transaction, so a group can never exist without its first player.
    pub async fn create_group(&self, master: Uuid, group: NewGroup) -> Result<GroupModel, AppError> {
        // Resolve the master up front so a bad id is a 404, not a FK error
        self.get_user_by_id(&master).await?;

        let gid = new_id();
        let now = Utc::now();
        let txn = self.database_connection.begin().await?;

        Group::insert(GroupActive {
            id: Set(gid),
            name: Set(group.name),
            description: Set(group.description),
            schedule: Set(group.schedule),
            location: Set(group.location),
            chronic: Set(group.chronic),
            master: Set(master),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&txn)
        .await?;

        GroupPlayer::insert(GroupPlayerActive {
            group_id: Set(gid),
            user_id: Set(master),
            created_at: Set(now),
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;
        self.get_group(gid).await
    }

    pub async fn get_group(&self, id: Uuid) -> Result<GroupModel, AppError> {
        Ok(Group::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Group not found".into()))?)
    }

    /// Members in join order; the master always comes first.
    pub async fn list_group_players(&self, group_id: Uuid) -> Result<Vec<UserModel>, AppError> {
        let memberships = GroupPlayer::find()
            .filter(entity::group_player::Column::GroupId.eq(group_id))
            .order_by_asc(entity::group_player::Column::CreatedAt)
            .all(&self.database_connection)
            .await?;

        let mut players = Vec::with_capacity(memberships.len());
        for membership in memberships {
            players.push(self.get_user_by_id(&membership.user_id).await?);
        }
        Ok(players)
    }
}
