use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::Property;

pub struct PropertyRepository {
    pool: PgPool,
}

impl PropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn fetch(&self, id: Uuid) -> Result<Option<Property>, DatabaseError> {
        let property = sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(property)
    }

    pub async fn all(&self) -> Result<Vec<Property>, DatabaseError> {
        let properties =
            sqlx::query_as::<_, Property>("SELECT * FROM properties ORDER BY created_at")
                .fetch_all(&self.pool)
                .await?;
        Ok(properties)
    }

    /// Fetch a batch of properties, preserving the order of the id list.
    pub async fn select_ids(&self, ids: &[Uuid]) -> Result<Vec<Property>, DatabaseError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let properties = sqlx::query_as::<_, Property>(
            "SELECT * FROM properties WHERE id = ANY($1) ORDER BY array_position($1, id)",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(properties)
    }

    pub async fn insert(
        &self,
        name: &str,
        address: &str,
        description: &str,
        landlord_id: Uuid,
    ) -> Result<Property, DatabaseError> {
        let property = sqlx::query_as::<_, Property>(
            "INSERT INTO properties (id, name, address, description, landlord_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(address)
        .bind(description)
        .bind(landlord_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(property)
    }

    /// Full replacement of the three updatable fields.
    pub async fn update_details(
        &self,
        id: Uuid,
        name: &str,
        address: &str,
        description: &str,
    ) -> Result<Option<Property>, DatabaseError> {
        let property = sqlx::query_as::<_, Property>(
            "UPDATE properties SET name = $2, address = $3, description = $4, updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(address)
        .bind(description)
        .fetch_optional(&self.pool)
        .await?;
        Ok(property)
    }

    pub async fn delete(&self, id: Uuid) -> Result<Option<Property>, DatabaseError> {
        let property =
            sqlx::query_as::<_, Property>("DELETE FROM properties WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(property)
    }

    pub async fn set_landlord(
        &self,
        id: Uuid,
        landlord_id: Option<Uuid>,
    ) -> Result<Option<Property>, DatabaseError> {
        let property = sqlx::query_as::<_, Property>(
            "UPDATE properties SET landlord_id = $2, updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(landlord_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(property)
    }

    /// Clear the landlord reference on every property owned by a landlord.
    pub async fn clear_landlord_for_all(&self, landlord_id: Uuid) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            "UPDATE properties SET landlord_id = NULL, updated_at = now() WHERE landlord_id = $1",
        )
        .bind(landlord_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn push_room(
        &self,
        id: Uuid,
        room_id: Uuid,
    ) -> Result<Option<Property>, DatabaseError> {
        let property = sqlx::query_as::<_, Property>(
            "UPDATE properties SET rooms = array_append(rooms, $2), updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(room_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(property)
    }

    pub async fn pull_room(
        &self,
        id: Uuid,
        room_id: Uuid,
    ) -> Result<Option<Property>, DatabaseError> {
        let property = sqlx::query_as::<_, Property>(
            "UPDATE properties SET rooms = array_remove(rooms, $2), updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(room_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(property)
    }
}
