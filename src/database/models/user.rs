use sqlx::FromRow;

/// Row of the `user` table. Only the columns login needs are selected.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub username: String,
    /// bcrypt hash, stored in the `password` column
    #[sqlx(rename = "password")]
    pub password_hash: String,
}
