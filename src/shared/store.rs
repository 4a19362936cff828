/**
 * Store Error Classification
 *
 * Uniqueness and referential integrity are enforced by the database; these
 * helpers let handlers turn the resulting errors into API errors.
 */

/// True if `err` is a UNIQUE constraint failure
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}

/// True if `err` is a FOREIGN KEY constraint failure
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_foreign_key_violation(),
        _ => false,
    }
}
