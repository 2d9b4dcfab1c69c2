pub mod auth;
pub mod availability;
pub mod bookings;
pub mod coaches;
pub mod db;
pub mod validation;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use sqlx::PgPool;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use auth::ProfileRepository;
use availability::{AvailabilityRepository, AvailabilityService};
use bookings::{BookingRepository, BookingService};
use coaches::CoachRepository;

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        availability::handlers::add_slot_handler,
        availability::handlers::remove_slot_handler,
        availability::handlers::list_slots_handler,
        bookings::handlers::create_booking_handler,
        bookings::handlers::list_bookings_handler,
        bookings::handlers::get_booking_handler,
        bookings::handlers::update_booking_status_handler,
    ),
    components(
        schemas(
            auth::Role,
            availability::AvailabilitySlot,
            availability::CreateSlotRequest,
            bookings::Booking,
            bookings::BookingStatus,
            bookings::CreateBookingRequest,
            bookings::UpdateStatusRequest,
            coaches::CoachDetails,
            coaches::UpsertCoachRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "availability", description = "Coach weekly availability endpoints"),
        (name = "bookings", description = "Session booking endpoints"),
        (name = "coaches", description = "Coach detail endpoints")
    ),
    info(
        title = "CoachDesk API",
        version = "1.0.0",
        description = "Availability and booking engine for a coaching marketplace"
    )
)]
struct ApiDoc;

/// Registers the bearer token scheme referenced by the protected endpoints
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub profile_repo: ProfileRepository,
    pub coach_repo: CoachRepository,
    pub availability_service: AvailabilityService,
    pub booking_service: BookingService,
}

/// Creates and configures the application router
/// Maps all API endpoints to their handlers and adds CORS middleware
pub fn create_router(db: PgPool) -> Router {
    use tower_http::cors::{Any, CorsLayer};

    let availability_service = AvailabilityService::new(AvailabilityRepository::new(db.clone()));
    let booking_service = BookingService::new(
        db.clone(),
        BookingRepository::new(db.clone()),
        availability_service.clone(),
    );

    let state = AppState {
        profile_repo: ProfileRepository::new(db.clone()),
        coach_repo: CoachRepository::new(db.clone()),
        availability_service,
        booking_service,
        db,
    };

    // Configure CORS to allow all origins, methods, and headers
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Coach catalog
        .route("/api/coaches/me", put(coaches::upsert_coach_handler))
        .route("/api/coaches/:profile_id", get(coaches::get_coach_handler))
        .route(
            "/api/coaches/:profile_id/availability",
            get(availability::list_slots_handler),
        )
        // Availability management
        .route("/api/availability", post(availability::add_slot_handler))
        .route(
            "/api/availability/:slot_id",
            delete(availability::remove_slot_handler),
        )
        // Bookings
        .route("/api/bookings", post(bookings::create_booking_handler))
        .route("/api/bookings", get(bookings::list_bookings_handler))
        .route("/api/bookings/:booking_id", get(bookings::get_booking_handler))
        .route(
            "/api/bookings/:booking_id/status",
            patch(bookings::update_booking_status_handler),
        )
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("CoachDesk API - Starting...");

    // Get configuration from environment variables
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set in environment");
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&database_url)
        .await
        .expect("Failed to create database pool");

    // Run SQLx migrations on startup
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations completed successfully");

    // Create the application router
    let app = create_router(db_pool);

    // Start the Axum server
    let addr = format!("{}:{}", host, port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("CoachDesk API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}

#[cfg(test)]
mod tests;
