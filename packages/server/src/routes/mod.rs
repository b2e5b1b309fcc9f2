use utoipa_axum::{router::OpenApiRouter, routes};

use crate::handlers::advertisement;
use crate::state::AppState;

pub fn ad_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(advertisement::create_ad))
        .routes(routes!(
            advertisement::get_ad,
            advertisement::update_ad,
            advertisement::delete_ad
        ))
}
