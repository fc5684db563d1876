use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use shared::Teacher;

use crate::storage::connection::DbConnection;
use crate::storage::traits::TeacherStorage;

/// SQLite-backed repository for teacher records
#[derive(Clone)]
pub struct TeacherRepository {
    db: DbConnection,
}

impl TeacherRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn teacher_from_row(row: &SqliteRow) -> Teacher {
        Teacher {
            id: row.get("id"),
            full_name: row.get("full_name"),
            age: row.get("age"),
            date_of_birth: row.get("date_of_birth"),
            number_of_classes: row.get("number_of_classes"),
        }
    }
}

#[async_trait]
impl TeacherStorage for TeacherRepository {
    async fn store_teacher(&self, teacher: &Teacher) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO teachers (id, full_name, date_of_birth, age, number_of_classes)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&teacher.id)
        .bind(&teacher.full_name)
        .bind(teacher.date_of_birth)
        .bind(teacher.age)
        .bind(teacher.number_of_classes)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_teacher(&self, teacher_id: &str) -> Result<Option<Teacher>> {
        let row = sqlx::query(
            r#"
            SELECT id, full_name, date_of_birth, age, number_of_classes
            FROM teachers
            WHERE id = ?
            "#,
        )
        .bind(teacher_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.as_ref().map(Self::teacher_from_row))
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        let rows = sqlx::query(
            r#"
            SELECT id, full_name, date_of_birth, age, number_of_classes
            FROM teachers
            ORDER BY rowid
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.iter().map(Self::teacher_from_row).collect())
    }

    async fn update_teacher(&self, teacher: &Teacher) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE teachers
            SET full_name = ?, date_of_birth = ?, age = ?, number_of_classes = ?
            WHERE id = ?
            "#,
        )
        .bind(&teacher.full_name)
        .bind(teacher.date_of_birth)
        .bind(teacher.age)
        .bind(teacher.number_of_classes)
        .bind(&teacher.id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_teacher(&self, teacher_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = ?")
            .bind(teacher_id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
