use sqlx::{Pool, Sqlite};

use crate::db::models::Note;
use crate::error::AppError;

pub struct NoteRepository;

impl NoteRepository {
    pub async fn create(
        pool: &Pool<Sqlite>,
        user_id: i64,
        title: &str,
        content: &str,
    ) -> Result<Note, AppError> {
        let created_at = chrono::Utc::now().timestamp();

        let note = sqlx::query_as::<_, Note>(
            r#"
INSERT INTO notes (title, content, user_id, created_at)
VALUES (?, ?, ?, ?)
RETURNING *
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(user_id)
        .bind(created_at)
        .fetch_one(pool)
        .await?;

        Ok(note)
    }

    pub async fn list_by_owner(pool: &Pool<Sqlite>, user_id: i64) -> Result<Vec<Note>, AppError> {
        let notes = sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE user_id = ?")
            .bind(user_id)
            .fetch_all(pool)
            .await?;

        Ok(notes)
    }

    /// Updates a note only when both id and owner match; `None` means no such
    /// note exists for this user.
    pub async fn update_owned(
        pool: &Pool<Sqlite>,
        id: i64,
        user_id: i64,
        title: &str,
        content: &str,
    ) -> Result<Option<Note>, AppError> {
        let note = sqlx::query_as::<_, Note>(
            r#"
UPDATE notes SET title = ?, content = ?
WHERE id = ? AND user_id = ?
RETURNING *
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(note)
    }

    /// Deletes a note only when both id and owner match; returns the deleted
    /// row.
    pub async fn delete_owned(
        pool: &Pool<Sqlite>,
        id: i64,
        user_id: i64,
    ) -> Result<Option<Note>, AppError> {
        let note = sqlx::query_as::<_, Note>(
            r#"
DELETE FROM notes
WHERE id = ? AND user_id = ?
RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(note)
    }
}
