use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::database::DatabaseManager;

pub fn app() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(landlord_routes())
        .merge(property_routes())
        .merge(room_routes())
        .merge(tenant_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn landlord_routes() -> Router {
    use axum::routing::{delete, post, put};

    use crate::handlers::landlord;

    Router::new()
        .route("/landlord/create", post(landlord::create::create))
        .route(
            "/landlord/add-property/:landlord_id",
            post(landlord::add_property::add_property),
        )
        .route("/landlord/get-one/:landlord_id", get(landlord::show::show))
        .route("/landlord", get(landlord::list::list))
        .route("/landlord/update/:landlord_id", put(landlord::update::update))
        .route(
            "/landlord/delete/:landlord_id",
            delete(landlord::delete::delete),
        )
        .route(
            "/landlord/remove-property/:landlord_id/:property_id",
            delete(landlord::remove_property::remove_property),
        )
        .route(
            "/landlord/get-landlord-properties/:landlord_id",
            get(landlord::properties::properties_of),
        )
        .route("/landlord/login", post(landlord::login::login))
}

fn property_routes() -> Router {
    use axum::routing::{delete, post, put};

    use crate::handlers::property;

    Router::new()
        .route("/property/create", post(property::create::create))
        .route("/property", get(property::list::list))
        .route("/property/get-one/:property_id", get(property::show::show))
        .route("/property/update/:property_id", put(property::update::update))
        .route(
            "/property/delete/:property_id",
            delete(property::delete::delete),
        )
        .route("/property/:property_id/rooms", get(property::rooms::rooms_of))
}

fn room_routes() -> Router {
    use axum::routing::{delete, post, put};

    use crate::handlers::room;

    Router::new()
        .route("/room/create", post(room::create::create))
        .route(
            "/room/update-availability/:room_id",
            put(room::availability::update_availability),
        )
        .route(
            "/room/update-renting-price/:room_id",
            put(room::update_price::update_price),
        )
        .route("/room", get(room::list::list))
        .route("/room/get-one/:room_id", get(room::show::show))
        .route("/room/delete/:room_id", delete(room::delete::delete))
        .route("/room/rent/:room_id", post(room::rent::rent))
        .route(
            "/room/make-available/:room_id",
            put(room::make_available::make_available),
        )
}

fn tenant_routes() -> Router {
    use axum::routing::{delete, post, put};

    use crate::handlers::tenant;

    Router::new()
        .route(
            "/tenant/create-with-no-room",
            post(tenant::create::create_without_room),
        )
        .route("/tenant/create", post(tenant::create_with_room::create_with_room))
        .route("/tenant", get(tenant::list::list))
        .route("/tenant/get-one/:tenant_id", get(tenant::show::show))
        .route("/tenant/update/:tenant_id", put(tenant::update::update))
        .route("/tenant/delete/:tenant_id", delete(tenant::delete::delete))
        .route("/tenant/login", post(tenant::login::login))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Rental API",
        "version": version,
        "description": "Property-rental management backend",
        "endpoints": {
            "landlord": "/landlord",
            "property": "/property",
            "room": "/room",
            "tenant": "/tenant",
        },
    }))
}

async fn health() -> impl IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "database": "ok",
                "timestamp": now,
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "database_error": e.to_string(),
                "timestamp": now,
            })),
        ),
    }
}
