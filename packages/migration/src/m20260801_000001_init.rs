use sea_orm::Statement;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::extension::postgres::Type as PgType;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKey, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Groups {
    Table,
    Id,
    CreatedBy,
    Name,
    Phase,
    Status,
    Visibility,
    MinMembers,
    MaxMembers,
    RoundNumber,
    CreatedAt,
    UpdatedAt,
    ActivatedAt,
}

#[derive(Iden)]
enum GroupMembers {
    Table,
    Id,
    GroupId,
    UserId,
    Role,
    JoinedAt,
}

#[derive(Iden)]
enum VotingSessions {
    Table,
    Id,
    GroupId,
    Title,
    Description,
    Options,
    Deadline,
    Status,
    CreatedBy,
    CreatedAt,
}

#[derive(Iden)]
enum Votes {
    Table,
    Id,
    SessionId,
    UserId,
    OptionSelected,
    CreatedAt,
}

#[derive(Iden)]
enum NegotiationPhases {
    Table,
    Id,
    GroupId,
    PhaseId,
    Status,
    Requirements,
    StartedAt,
    EndedAt,
}

#[derive(Iden)]
enum GroupAnnouncements {
    Table,
    Id,
    GroupId,
    Body,
    CreatedAt,
}

#[derive(Iden)]
enum GroupPhaseEnum {
    #[iden = "group_phase"]
    Type,
}

#[derive(Iden)]
enum GroupStatusEnum {
    #[iden = "group_status"]
    Type,
}

#[derive(Iden)]
enum GroupVisibilityEnum {
    #[iden = "group_visibility"]
    Type,
}

#[derive(Iden)]
enum MemberRoleEnum {
    #[iden = "member_role"]
    Type,
}

#[derive(Iden)]
enum SessionStatusEnum {
    #[iden = "session_status"]
    Type,
}

#[derive(Iden)]
enum NegotiationPhaseIdEnum {
    #[iden = "negotiation_phase_id"]
    Type,
}

#[derive(Iden)]
enum NegotiationPhaseStatusEnum {
    #[iden = "negotiation_phase_status"]
    Type,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create Postgres enums (PostgreSQL only)
        match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => {
                // Helper function to check if enum exists
                async fn enum_exists(
                    manager: &SchemaManager<'_>,
                    enum_name: &str,
                ) -> Result<bool, DbErr> {
                    let result = manager
                        .get_connection()
                        .query_one(Statement::from_string(
                            sea_orm::DatabaseBackend::Postgres,
                            format!("SELECT 1 FROM pg_type WHERE typname = '{}'", enum_name),
                        ))
                        .await?;
                    Ok(result.is_some())
                }

                if !enum_exists(manager, "group_phase").await? {
                    manager
                        .create_type(
                            PgType::create()
                                .as_enum(GroupPhaseEnum::Type)
                                .values([
                                    "INITIAL",
                                    "PENDING_MEMBERS",
                                    "ACTIVE",
                                    "NEGOTIATION",
                                    "VOTE_ADMINS",
                                    "CONTRACTING",
                                    "SUPERVISED",
                                    "UNDER_ARBITRATION",
                                    "CLOSED",
                                ])
                                .to_owned(),
                        )
                        .await?;
                }

                if !enum_exists(manager, "group_status").await? {
                    manager
                        .create_type(
                            PgType::create()
                                .as_enum(GroupStatusEnum::Type)
                                .values(["PENDING_MEMBERS", "ACTIVE", "CLOSED"])
                                .to_owned(),
                        )
                        .await?;
                }

                if !enum_exists(manager, "group_visibility").await? {
                    manager
                        .create_type(
                            PgType::create()
                                .as_enum(GroupVisibilityEnum::Type)
                                .values(["PRIVATE", "PUBLIC"])
                                .to_owned(),
                        )
                        .await?;
                }

                if !enum_exists(manager, "member_role").await? {
                    manager
                        .create_type(
                            PgType::create()
                                .as_enum(MemberRoleEnum::Type)
                                .values(["CREATOR", "ADMIN", "MEMBER"])
                                .to_owned(),
                        )
                        .await?;
                }

                if !enum_exists(manager, "session_status").await? {
                    manager
                        .create_type(
                            PgType::create()
                                .as_enum(SessionStatusEnum::Type)
                                .values(["ACTIVE", "CLOSED"])
                                .to_owned(),
                        )
                        .await?;
                }

                if !enum_exists(manager, "negotiation_phase_id").await? {
                    manager
                        .create_type(
                            PgType::create()
                                .as_enum(NegotiationPhaseIdEnum::Type)
                                .values([
                                    "PREPARATION",
                                    "PROPOSAL",
                                    "NEGOTIATION",
                                    "VOTING",
                                    "CONTRACTING",
                                ])
                                .to_owned(),
                        )
                        .await?;
                }

                if !enum_exists(manager, "negotiation_phase_status").await? {
                    manager
                        .create_type(
                            PgType::create()
                                .as_enum(NegotiationPhaseStatusEnum::Type)
                                .values(["PENDING", "ACTIVE", "COMPLETED"])
                                .to_owned(),
                        )
                        .await?;
                }
            }
            sea_orm::DatabaseBackend::Sqlite => {
                // SQLite doesn't need enum types - they're stored as TEXT
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".into()));
            }
        }

        // groups table
        manager
            .create_table(
                Table::create()
                    .table(Groups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Groups::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Groups::CreatedBy).big_integer().not_null())
                    .col(ColumnDef::new(Groups::Name).string().null())
                    .col(
                        ColumnDef::new(Groups::Phase)
                            .custom(GroupPhaseEnum::Type)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Groups::Status)
                            .custom(GroupStatusEnum::Type)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Groups::Visibility)
                            .custom(GroupVisibilityEnum::Type)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Groups::MinMembers).integer().null())
                    .col(ColumnDef::new(Groups::MaxMembers).integer().not_null())
                    .col(ColumnDef::new(Groups::RoundNumber).integer().not_null())
                    .col(
                        ColumnDef::new(Groups::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Groups::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Groups::ActivatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // group_members table
        manager
            .create_table(
                Table::create()
                    .table(GroupMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GroupMembers::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(GroupMembers::GroupId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GroupMembers::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GroupMembers::Role)
                            .custom(MemberRoleEnum::Type)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GroupMembers::JoinedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_members_group")
                            .from(GroupMembers::Table, GroupMembers::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One membership per (group, user); backstops concurrent joins.
        manager
            .create_index(
                Index::create()
                    .name("ux_group_members_group_user")
                    .table(GroupMembers::Table)
                    .col(GroupMembers::GroupId)
                    .col(GroupMembers::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // voting_sessions table
        manager
            .create_table(
                Table::create()
                    .table(VotingSessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VotingSessions::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(VotingSessions::GroupId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(VotingSessions::Title).string().not_null())
                    .col(ColumnDef::new(VotingSessions::Description).string().null())
                    .col(ColumnDef::new(VotingSessions::Options).json().not_null())
                    .col(
                        ColumnDef::new(VotingSessions::Deadline)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(VotingSessions::Status)
                            .custom(SessionStatusEnum::Type)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VotingSessions::CreatedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VotingSessions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_voting_sessions_group")
                            .from(VotingSessions::Table, VotingSessions::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // votes table
        manager
            .create_table(
                Table::create()
                    .table(Votes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Votes::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Votes::SessionId).big_integer().not_null())
                    .col(ColumnDef::new(Votes::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Votes::OptionSelected)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Votes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_votes_session")
                            .from(Votes::Table, Votes::SessionId)
                            .to(VotingSessions::Table, VotingSessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one vote per (session, user); first vote wins.
        manager
            .create_index(
                Index::create()
                    .name("ux_votes_session_user")
                    .table(Votes::Table)
                    .col(Votes::SessionId)
                    .col(Votes::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // negotiation_phases table
        manager
            .create_table(
                Table::create()
                    .table(NegotiationPhases::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NegotiationPhases::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(NegotiationPhases::GroupId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NegotiationPhases::PhaseId)
                            .custom(NegotiationPhaseIdEnum::Type)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NegotiationPhases::Status)
                            .custom(NegotiationPhaseStatusEnum::Type)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NegotiationPhases::Requirements)
                            .json()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NegotiationPhases::StartedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(NegotiationPhases::EndedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_negotiation_phases_group")
                            .from(NegotiationPhases::Table, NegotiationPhases::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_negotiation_phases_group_phase")
                    .table(NegotiationPhases::Table)
                    .col(NegotiationPhases::GroupId)
                    .col(NegotiationPhases::PhaseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // group_announcements table
        manager
            .create_table(
                Table::create()
                    .table(GroupAnnouncements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GroupAnnouncements::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(GroupAnnouncements::GroupId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(GroupAnnouncements::Body).text().not_null())
                    .col(
                        ColumnDef::new(GroupAnnouncements::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_announcements_group")
                            .from(GroupAnnouncements::Table, GroupAnnouncements::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GroupAnnouncements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(NegotiationPhases::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Votes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(VotingSessions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GroupMembers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Groups::Table).to_owned())
            .await?;

        if manager.get_database_backend() == sea_orm::DatabaseBackend::Postgres {
            manager
                .drop_type(
                    PgType::drop()
                        .if_exists()
                        .name(NegotiationPhaseStatusEnum::Type)
                        .to_owned(),
                )
                .await?;
            manager
                .drop_type(
                    PgType::drop()
                        .if_exists()
                        .name(NegotiationPhaseIdEnum::Type)
                        .to_owned(),
                )
                .await?;
            manager
                .drop_type(
                    PgType::drop()
                        .if_exists()
                        .name(SessionStatusEnum::Type)
                        .to_owned(),
                )
                .await?;
            manager
                .drop_type(
                    PgType::drop()
                        .if_exists()
                        .name(MemberRoleEnum::Type)
                        .to_owned(),
                )
                .await?;
            manager
                .drop_type(
                    PgType::drop()
                        .if_exists()
                        .name(GroupVisibilityEnum::Type)
                        .to_owned(),
                )
                .await?;
            manager
                .drop_type(
                    PgType::drop()
                        .if_exists()
                        .name(GroupStatusEnum::Type)
                        .to_owned(),
                )
                .await?;
            manager
                .drop_type(
                    PgType::drop()
                        .if_exists()
                        .name(GroupPhaseEnum::Type)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}
