/**
 * API Route Handlers
 *
 * This module wires the API endpoints to their handlers.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /token` - Exchange login and password for a bearer token
 * - `GET /users/me` - Get the authenticated user
 *
 * ## Pokemon
 * - `POST /pokemons` - Create
 * - `GET /pokemons-list` - List (`skip`, `limit`)
 * - `GET /pokemons/{id}` - Read
 * - `PUT /pokemons/{id}` - Update
 * - `DELETE /pokemons/{id}` - Delete
 *
 * ## Operations
 * - `GET /health` - Store round-trip
 */

use axum::routing::{get, post};
use axum::Router;

use crate::backend::auth::{get_me, login};
use crate::backend::pokemon::{
    create_pokemon, delete_pokemon, get_pokemon, list_pokemons, update_pokemon,
};
use crate::backend::routes::health::health_check;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// `/token` and `/health` are public. Every other route requires a bearer
/// token, enforced by the `AuthUser` extractor in its handler.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/token", post(login))
        .route("/users/me", get(get_me))
        // Pokemon endpoints
        .route("/pokemons", post(create_pokemon))
        .route("/pokemons-list", get(list_pokemons))
        .route(
            "/pokemons/{id}",
            get(get_pokemon).put(update_pokemon).delete(delete_pokemon),
        )
        .route("/health", get(health_check))
}
