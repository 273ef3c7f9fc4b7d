use sqlx::SqlitePool;
use tracing::debug;

use crate::database::manager::DatabaseError;
use crate::database::models::{District, DistrictFields, State, StateStats, User};

/// Typed access to the `user`, `state` and `district` tables.
///
/// Every caller-supplied value is bound as a parameter; no SQL text is
/// assembled from request data.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT username, password FROM user WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn list_states(&self) -> Result<Vec<State>, DatabaseError> {
        let states = sqlx::query_as::<_, State>(
            "SELECT state_id, state_name, population FROM state",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(states)
    }

    pub async fn find_state(&self, state_id: i64) -> Result<Option<State>, DatabaseError> {
        let state = sqlx::query_as::<_, State>(
            "SELECT state_id, state_name, population FROM state WHERE state_id = ?",
        )
        .bind(state_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(state)
    }

    /// Insert a district and return the id the store assigned.
    pub async fn insert_district(&self, fields: &DistrictFields) -> Result<i64, DatabaseError> {
        let result = sqlx::query(
            "INSERT INTO district (state_id, district_name, cases, cured, active, deaths)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(fields.state_id)
        .bind(&fields.district_name)
        .bind(fields.cases)
        .bind(fields.cured)
        .bind(fields.active)
        .bind(fields.deaths)
        .execute(&self.pool)
        .await?;

        let district_id = result.last_insert_rowid();
        debug!("Inserted district {} for state {}", district_id, fields.state_id);
        Ok(district_id)
    }

    pub async fn find_district(&self, district_id: i64) -> Result<Option<District>, DatabaseError> {
        let district = sqlx::query_as::<_, District>(
            "SELECT district_id, district_name, state_id, cases, cured, active, deaths
             FROM district
             WHERE district_id = ?",
        )
        .bind(district_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(district)
    }

    /// Overwrite every writable column. Returns `NotFound` when no row has
    /// the given id.
    pub async fn update_district(
        &self,
        district_id: i64,
        fields: &DistrictFields,
    ) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            "UPDATE district
             SET district_name = ?, state_id = ?, cases = ?, cured = ?, active = ?, deaths = ?
             WHERE district_id = ?",
        )
        .bind(&fields.district_name)
        .bind(fields.state_id)
        .bind(fields.cases)
        .bind(fields.cured)
        .bind(fields.active)
        .bind(fields.deaths)
        .bind(district_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound {
                resource: "District",
                id: district_id,
            });
        }
        Ok(())
    }

    /// Returns whether a row was removed.
    pub async fn delete_district(&self, district_id: i64) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM district WHERE district_id = ?")
            .bind(district_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Aggregate in the store. A state with no districts sums to zero.
    pub async fn state_stats(&self, state_id: i64) -> Result<StateStats, DatabaseError> {
        let stats = sqlx::query_as::<_, StateStats>(
            "SELECT
                COALESCE(SUM(district.cases), 0) AS total_cases,
                COALESCE(SUM(district.cured), 0) AS total_cured,
                COALESCE(SUM(district.active), 0) AS total_active,
                COALESCE(SUM(district.deaths), 0) AS total_deaths
             FROM state
             JOIN district ON district.state_id = state.state_id
             WHERE state.state_id = ?",
        )
        .bind(state_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(stats)
    }
}
