/**
 * User Model and Database Operations
 *
 * This module is the credential store: the `usuarios` table holding each
 * login and its bcrypt hash. The API only reads it; users are inserted by
 * the `create-user` binary.
 */

use sqlx::SqlitePool;

/// User row from the `usuarios` table
#[derive(Clone, sqlx::FromRow)]
pub struct User {
    /// System-assigned id
    pub id: i64,
    /// Unique login, immutable after creation
    pub login: String,
    /// bcrypt hash of the password
    #[sqlx(rename = "senha_hash")]
    pub password_hash: String,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("login", &self.login)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `login` - Unique login
/// * `password_hash` - Already hashed password (see `auth::password::hash_password`)
///
/// # Returns
/// Created user, or the store error (a UNIQUE violation if the login exists)
pub async fn create_user(
    pool: &SqlitePool,
    login: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO usuarios (login, senha_hash)
        VALUES (?1, ?2)
        RETURNING id, login, senha_hash
        "#,
    )
    .bind(login)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by login
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_login(
    pool: &SqlitePool,
    login: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, login, senha_hash
        FROM usuarios
        WHERE login = ?1
        "#,
    )
    .bind(login)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::config::connect_in_memory;

    #[tokio::test]
    async fn test_create_and_get_user() {
        let pool = connect_in_memory().await.unwrap();

        let created = create_user(&pool, "alice", "$2b$04$hash").await.unwrap();
        assert_eq!(created.login, "alice");

        let found = get_user_by_login(&pool, "alice").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.password_hash, "$2b$04$hash");
    }

    #[tokio::test]
    async fn test_get_missing_user() {
        let pool = connect_in_memory().await.unwrap();
        assert!(get_user_by_login(&pool, "nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_login_is_unique_violation() {
        let pool = connect_in_memory().await.unwrap();
        create_user(&pool, "alice", "h1").await.unwrap();

        let err = create_user(&pool, "alice", "h2").await.unwrap_err();
        assert!(crate::backend::error::is_unique_violation(&err));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let user = User {
            id: 1,
            login: "alice".to_string(),
            password_hash: "$2b$12$secret".to_string(),
        };
        let rendered = format!("{:?}", user);
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("secret"));
    }
}
