pub use sea_orm_migration::prelude::*;

mod m20231001_create_catalog_tables;
mod m20231002_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20231001_create_catalog_tables::Migration),
            Box::new(m20231002_add_indexes::Migration),
        ]
    }
}
