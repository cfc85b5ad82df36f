//! `SQLite` implementation of [`PoseRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use posehub_app::ports::PoseRepository;
use posehub_domain::angles::ServoAngles;
use posehub_domain::error::PoseHubError;
use posehub_domain::id::PoseId;
use posehub_domain::pose::Pose;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Pose`].
struct Wrapper(Pose);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let servo1: i64 = row.try_get("servo1")?;
        let servo2: i64 = row.try_get("servo2")?;
        let servo3: i64 = row.try_get("servo3")?;
        let servo4: i64 = row.try_get("servo4")?;

        Ok(Self(Pose::new(
            PoseId::new(id),
            ServoAngles::new(servo1, servo2, servo3, servo4),
        )))
    }
}

const INSERT: &str = "INSERT INTO poses (servo1, servo2, servo3, servo4) VALUES (?, ?, ?, ?)";
const SELECT_ALL: &str = "SELECT id, servo1, servo2, servo3, servo4 FROM poses ORDER BY id DESC";
const DELETE_BY_ID: &str = "DELETE FROM poses WHERE id = ?";

/// `SQLite`-backed pose repository.
pub struct SqlitePoseRepository {
    pool: SqlitePool,
}

impl SqlitePoseRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PoseRepository for SqlitePoseRepository {
    fn insert(
        &self,
        angles: ServoAngles,
    ) -> impl Future<Output = Result<(), PoseHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(angles.servo1)
                .bind(angles.servo2)
                .bind(angles.servo3)
                .bind(angles.servo4)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn list(&self) -> impl Future<Output = Result<Vec<Pose>, PoseHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn delete(&self, id: PoseId) -> impl Future<Output = Result<(), PoseHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            // Row count deliberately unchecked; deleting a missing id succeeds.
            sqlx::query(DELETE_BY_ID)
                .bind(id.value())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
