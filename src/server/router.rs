use axum::{
    routing::{get, post},
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{stats, workshop, workshop_type, BEARER_AUTH},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Workshop Portal API",
        description = "Workshop proposals, acceptance and statistics"
    ),
    paths(
        workshop::propose_workshop,
        workshop::get_workshop,
        workshop::accept_workshop,
        workshop::change_workshop_date,
        workshop::get_my_workshops,
        stats::get_public_workshop_stats,
        stats::get_team_stats,
        stats::get_team_stats_by_id,
        workshop_type::get_workshop_types,
        workshop_type::get_workshop_type,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "workshop", description = "Workshop lifecycle"),
        (name = "stats", description = "Public and team statistics"),
        (name = "workshop_type", description = "Workshop type catalog")
    )
)]
struct ApiDoc;

/// Registers the bearer token scheme referenced by authenticated endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            BEARER_AUTH,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/workshops/", post(workshop::propose_workshop))
        .route("/api/workshops/{id}/", get(workshop::get_workshop))
        .route("/api/workshops/{id}/accept/", post(workshop::accept_workshop))
        .route(
            "/api/workshops/{id}/change-date/",
            post(workshop::change_workshop_date),
        )
        .route("/api/my-workshops/", get(workshop::get_my_workshops))
        .route(
            "/api/public-workshop-stats/",
            get(stats::get_public_workshop_stats),
        )
        .route("/api/team-stats/", get(stats::get_team_stats))
        .route("/api/team-stats/{team_id}/", get(stats::get_team_stats_by_id))
        .route("/api/workshop-types/", get(workshop_type::get_workshop_types))
        .route(
            "/api/workshop-types/{id}/",
            get(workshop_type::get_workshop_type),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
}
