//! Schema scripts compiled into the binary, in application order

/// One schema script
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

pub const MIGRATIONS: &[Migration] = &[Migration {
    id: "001_initial_schema",
    sql: include_str!("../../migrations/001_initial_schema.sql"),
}];
