pub use sea_orm_migration::prelude::*;

mod m20251110_000001_create_payout_table;
mod m20251110_000002_create_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251110_000001_create_payout_table::Migration),
            Box::new(m20251110_000002_create_message_table::Migration),
        ]
    }
}
