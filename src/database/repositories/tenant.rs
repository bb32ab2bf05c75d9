use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::Tenant;

pub struct TenantRepository {
    pool: PgPool,
}

impl TenantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn fetch(&self, id: Uuid) -> Result<Option<Tenant>, DatabaseError> {
        let tenant = sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(tenant)
    }

    pub async fn fetch_by_email(&self, email: &str) -> Result<Option<Tenant>, DatabaseError> {
        let tenant = sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(tenant)
    }

    pub async fn fetch_by_phone(&self, phone_number: &str) -> Result<Option<Tenant>, DatabaseError> {
        let tenant = sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE phone_number = $1")
            .bind(phone_number)
            .fetch_optional(&self.pool)
            .await?;
        Ok(tenant)
    }

    /// Reverse lookup: the tenant currently renting a room, if any.
    pub async fn fetch_by_room(&self, room_id: Uuid) -> Result<Option<Tenant>, DatabaseError> {
        let tenant = sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE room_rented = $1")
            .bind(room_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(tenant)
    }

    pub async fn all(&self) -> Result<Vec<Tenant>, DatabaseError> {
        let tenants = sqlx::query_as::<_, Tenant>("SELECT * FROM tenants ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;
        Ok(tenants)
    }

    pub async fn insert(
        &self,
        name: &str,
        email: &str,
        phone_number: &str,
        password_hash: &str,
        room_rented: Option<Uuid>,
        property_rented: Option<Uuid>,
    ) -> Result<Tenant, DatabaseError> {
        let tenant = sqlx::query_as::<_, Tenant>(
            "INSERT INTO tenants (id, name, email, phone_number, password, room_rented, property_rented) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(phone_number)
        .bind(password_hash)
        .bind(room_rented)
        .bind(property_rented)
        .fetch_one(&self.pool)
        .await?;
        Ok(tenant)
    }

    /// Patch update: a NULL bind keeps the stored value.
    #[allow(clippy::too_many_arguments)]
    pub async fn patch(
        &self,
        id: Uuid,
        name: Option<&str>,
        email: Option<&str>,
        phone_number: Option<&str>,
        password_hash: Option<&str>,
        room_rented: Option<Uuid>,
        property_rented: Option<Uuid>,
    ) -> Result<Option<Tenant>, DatabaseError> {
        let tenant = sqlx::query_as::<_, Tenant>(
            "UPDATE tenants SET \
                name = COALESCE($2, name), \
                email = COALESCE($3, email), \
                phone_number = COALESCE($4, phone_number), \
                password = COALESCE($5, password), \
                room_rented = COALESCE($6, room_rented), \
                property_rented = COALESCE($7, property_rented), \
                updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(phone_number)
        .bind(password_hash)
        .bind(room_rented)
        .bind(property_rented)
        .fetch_optional(&self.pool)
        .await?;
        Ok(tenant)
    }

    pub async fn set_room_rented(
        &self,
        id: Uuid,
        room_rented: Option<Uuid>,
    ) -> Result<Option<Tenant>, DatabaseError> {
        let tenant = sqlx::query_as::<_, Tenant>(
            "UPDATE tenants SET room_rented = $2, updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(room_rented)
        .fetch_optional(&self.pool)
        .await?;
        Ok(tenant)
    }

    /// Bind a tenant to a room and its property in one write.
    pub async fn assign_room(
        &self,
        id: Uuid,
        room_id: Uuid,
        property_id: Uuid,
    ) -> Result<Option<Tenant>, DatabaseError> {
        let tenant = sqlx::query_as::<_, Tenant>(
            "UPDATE tenants SET room_rented = $2, property_rented = $3, updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(room_id)
        .bind(property_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(tenant)
    }

    /// Clear both rental references.
    pub async fn clear_rented(&self, id: Uuid) -> Result<Option<Tenant>, DatabaseError> {
        let tenant = sqlx::query_as::<_, Tenant>(
            "UPDATE tenants SET room_rented = NULL, property_rented = NULL, updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(tenant)
    }

    pub async fn delete(&self, id: Uuid) -> Result<Option<Tenant>, DatabaseError> {
        let tenant = sqlx::query_as::<_, Tenant>("DELETE FROM tenants WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(tenant)
    }
}
