use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Group {
    Table,
    Id,
    Name,
    Description,
    Schedule,
    Location,
    Chronic,
    Master,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum GroupPlayer {
    Table,
    GroupId,
    UserId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Group::Table)
                .col(ColumnDef::new(Group::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Group::Name).string().not_null())
                .col(ColumnDef::new(Group::Description).string().not_null())
                .col(ColumnDef::new(Group::Schedule).string().not_null())
                .col(ColumnDef::new(Group::Location).string().not_null())
                .col(ColumnDef::new(Group::Chronic).string().not_null())
                .col(ColumnDef::new(Group::Master).uuid().not_null())
                .col(ColumnDef::new(Group::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Group::UpdatedAt).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        m.alter_table(
            Table::alter()
                .table(Group::Table)
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_group_master")
                        .from_tbl(Group::Table)
                        .from_col(Group::Master)
                        .to_tbl(User::Table)
                        .to_col(User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        // Membership join table, master gets seeded here at group creation
        m.create_table(
            Table::create()
                .table(GroupPlayer::Table)
                .col(ColumnDef::new(GroupPlayer::GroupId).uuid().not_null())
                .col(ColumnDef::new(GroupPlayer::UserId).uuid().not_null())
                .col(ColumnDef::new(GroupPlayer::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .primary_key(
                    Index::create()
                        .name("pk_group_player")
                        .col(GroupPlayer::GroupId)
                        .col(GroupPlayer::UserId)
                )
                .to_owned(),
        ).await?;

        m.alter_table(
            Table::alter()
                .table(GroupPlayer::Table)
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_group_player_group")
                        .from_tbl(GroupPlayer::Table)
                        .from_col(GroupPlayer::GroupId)
                        .to_tbl(Group::Table)
                        .to_col(Group::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_group_player_user")
                        .from_tbl(GroupPlayer::Table)
                        .from_col(GroupPlayer::UserId)
                        .to_tbl(User::Table)
                        .to_col(User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_group_player_group")
                .table(GroupPlayer::Table)
                .col(GroupPlayer::GroupId)
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_group_player_user")
                .table(GroupPlayer::Table)
                .col(GroupPlayer::UserId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(GroupPlayer::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(Group::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
