/// Row of the `user` table
///
/// The password is stored and compared verbatim.
#[derive(Debug, Clone, sqlx::FromRow)]
#[sqlx(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub password: String,
    pub display_name: String,
    pub review_level: i64,
}
