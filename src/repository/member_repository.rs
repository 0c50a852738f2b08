use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, SqlitePool};

use crate::{
    domain::{Member, NewMember, RoleCount},
    error::{AppError, Result},
    repository::MemberRepository,
};

#[derive(FromRow)]
struct MemberRow {
    id: i64,
    name: String,
    role: Option<String>,
    joined_date: NaiveDate,
}

pub struct SqliteMemberRepository {
    pool: SqlitePool,
}

impl SqliteMemberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_member(row: MemberRow) -> Member {
        Member {
            id: row.id,
            name: row.name,
            role: row.role,
            joined_date: row.joined_date,
        }
    }
}

#[async_trait]
impl MemberRepository for SqliteMemberRepository {
    async fn create(&self, new: NewMember) -> Result<Member> {
        let result = sqlx::query(
            r#"
            INSERT INTO members (name, role, joined_date)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&new.name)
        .bind(&new.role)
        .bind(new.joined_date)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        self.find_by_id(result.last_insert_rowid())
            .await?
            .ok_or_else(|| AppError::Database("Failed to retrieve created member".to_string()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Member>> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, name, role, joined_date
            FROM members
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(row.map(Self::row_to_member))
    }

    async fn list(&self) -> Result<Vec<Member>> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, name, role, joined_date
            FROM members
            ORDER BY joined_date DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Self::row_to_member).collect())
    }

    async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM members")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(count.0)
    }

    async fn count_by_role(&self) -> Result<Vec<RoleCount>> {
        let rows = sqlx::query_as::<_, RoleCount>(
            r#"
            SELECT COALESCE(NULLIF(TRIM(role), ''), 'Unassigned') AS role, COUNT(*) AS count
            FROM members
            GROUP BY 1
            ORDER BY count DESC, role ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(rows)
    }
}
