use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::Landlord;

pub struct LandlordRepository {
    pool: PgPool,
}

impl LandlordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn fetch(&self, id: Uuid) -> Result<Option<Landlord>, DatabaseError> {
        let landlord = sqlx::query_as::<_, Landlord>("SELECT * FROM landlords WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(landlord)
    }

    pub async fn fetch_by_email(&self, email: &str) -> Result<Option<Landlord>, DatabaseError> {
        let landlord = sqlx::query_as::<_, Landlord>("SELECT * FROM landlords WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(landlord)
    }

    pub async fn all(&self) -> Result<Vec<Landlord>, DatabaseError> {
        let landlords =
            sqlx::query_as::<_, Landlord>("SELECT * FROM landlords ORDER BY created_at")
                .fetch_all(&self.pool)
                .await?;
        Ok(landlords)
    }

    pub async fn insert(
        &self,
        name: &str,
        email: &str,
        phone_number: &str,
        password_hash: &str,
    ) -> Result<Landlord, DatabaseError> {
        let landlord = sqlx::query_as::<_, Landlord>(
            "INSERT INTO landlords (id, name, email, phone_number, password) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(phone_number)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(landlord)
    }

    /// Full replacement of the three updatable fields.
    pub async fn update_details(
        &self,
        id: Uuid,
        name: &str,
        email: &str,
        phone_number: &str,
    ) -> Result<Option<Landlord>, DatabaseError> {
        let landlord = sqlx::query_as::<_, Landlord>(
            "UPDATE landlords SET name = $2, email = $3, phone_number = $4, updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(phone_number)
        .fetch_optional(&self.pool)
        .await?;
        Ok(landlord)
    }

    pub async fn delete(&self, id: Uuid) -> Result<Option<Landlord>, DatabaseError> {
        let landlord =
            sqlx::query_as::<_, Landlord>("DELETE FROM landlords WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(landlord)
    }

    pub async fn push_property(
        &self,
        id: Uuid,
        property_id: Uuid,
    ) -> Result<Option<Landlord>, DatabaseError> {
        let landlord = sqlx::query_as::<_, Landlord>(
            "UPDATE landlords SET properties = array_append(properties, $2), updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(property_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(landlord)
    }

    pub async fn pull_property(
        &self,
        id: Uuid,
        property_id: Uuid,
    ) -> Result<Option<Landlord>, DatabaseError> {
        let landlord = sqlx::query_as::<_, Landlord>(
            "UPDATE landlords SET properties = array_remove(properties, $2), updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(property_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(landlord)
    }

    /// Remove a property id from every landlord list containing it.
    pub async fn pull_property_from_all(&self, property_id: Uuid) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            "UPDATE landlords SET properties = array_remove(properties, $1), updated_at = now() \
             WHERE $1 = ANY(properties)",
        )
        .bind(property_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}
