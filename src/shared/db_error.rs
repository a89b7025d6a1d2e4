// src/shared/db_error.rs
//
// Postgres constraint failures only reach us as driver text through sea-orm,
// so classification is string based.

use sea_orm::DbErr;

pub fn is_unique_violation(e: &DbErr) -> bool {
    let msg = e.to_string().to_lowercase();
    msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
}

pub fn is_foreign_key_violation(e: &DbErr) -> bool {
    let msg = e.to_string().to_lowercase();
    msg.contains("23503") || msg.contains("foreign key")
}
