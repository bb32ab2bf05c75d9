use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{Room, RoomType};

pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn fetch(&self, id: Uuid) -> Result<Option<Room>, DatabaseError> {
        let room = sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(room)
    }

    pub async fn all(&self) -> Result<Vec<Room>, DatabaseError> {
        let rooms = sqlx::query_as::<_, Room>("SELECT * FROM rooms ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;
        Ok(rooms)
    }

    pub async fn by_property(&self, property: Uuid) -> Result<Vec<Room>, DatabaseError> {
        let rooms =
            sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE property = $1 ORDER BY created_at")
                .bind(property)
                .fetch_all(&self.pool)
                .await?;
        Ok(rooms)
    }

    /// Fetch a batch of rooms, preserving the order of the id list.
    pub async fn select_ids(&self, ids: &[Uuid]) -> Result<Vec<Room>, DatabaseError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let rooms = sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms WHERE id = ANY($1) ORDER BY array_position($1, id)",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(rooms)
    }

    pub async fn insert(
        &self,
        name: &str,
        room_type: RoomType,
        renting_price: Decimal,
        property: Uuid,
        landlord: Uuid,
    ) -> Result<Room, DatabaseError> {
        let room = sqlx::query_as::<_, Room>(
            "INSERT INTO rooms (id, name, room_type, renting_price, property, landlord) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(room_type)
        .bind(renting_price)
        .bind(property)
        .bind(landlord)
        .fetch_one(&self.pool)
        .await?;
        Ok(room)
    }

    pub async fn update_price(
        &self,
        id: Uuid,
        renting_price: Decimal,
    ) -> Result<Option<Room>, DatabaseError> {
        let room = sqlx::query_as::<_, Room>(
            "UPDATE rooms SET renting_price = $2, updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(renting_price)
        .fetch_optional(&self.pool)
        .await?;
        Ok(room)
    }

    pub async fn mark_rented(
        &self,
        id: Uuid,
        tenant_id: Uuid,
    ) -> Result<Option<Room>, DatabaseError> {
        let room = sqlx::query_as::<_, Room>(
            "UPDATE rooms SET status = 'rented', tenant = $2, updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(room)
    }

    pub async fn mark_available(&self, id: Uuid) -> Result<Option<Room>, DatabaseError> {
        let room = sqlx::query_as::<_, Room>(
            "UPDATE rooms SET status = 'available', tenant = NULL, updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(room)
    }

    pub async fn delete(&self, id: Uuid) -> Result<Option<Room>, DatabaseError> {
        let room = sqlx::query_as::<_, Room>("DELETE FROM rooms WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(room)
    }
}
