/**
 * Pokemon CRUD Service
 *
 * Business rules for the pokemon endpoints, between the HTTP handlers and
 * the record store:
 *
 * - payloads are validated before any statement runs
 * - a record's owner is always the authenticated caller at creation time
 * - names are unique; a taken name is a `Conflict`, never a second row
 * - a missing id is a `NotFound`
 *
 * Every write is one statement, so a failed request leaves the store as it
 * found it. The name pre-check on create only short-circuits the common case;
 * two racing creates with the same name are settled by the UNIQUE
 * constraint, and the loser gets the same `Conflict`.
 *
 * Any authenticated user may update or delete any record. Mutations by a
 * user other than the owner are logged.
 */

use sqlx::SqlitePool;

use crate::backend::auth::users::User;
use crate::backend::error::{
    is_unique_violation, BackendError, BackendResult, DUPLICATE_NAME_DETAIL,
    POKEMON_NOT_FOUND_DETAIL,
};
use crate::backend::pokemon::db;
use crate::shared::pokemon::{Pokemon, PokemonCreate};

fn map_write_error(err: sqlx::Error) -> BackendError {
    if is_unique_violation(&err) {
        BackendError::conflict(DUPLICATE_NAME_DETAIL)
    } else {
        BackendError::Database(err)
    }
}

fn not_found() -> BackendError {
    BackendError::not_found(POKEMON_NOT_FOUND_DETAIL)
}

/// Create a pokemon owned by `owner`
pub async fn create_pokemon(
    pool: &SqlitePool,
    owner: &User,
    body: PokemonCreate,
) -> BackendResult<Pokemon> {
    body.validate()?;

    let mut conn = pool.acquire().await?;

    if db::get_pokemon_by_nome(&mut conn, &body.nome).await?.is_some() {
        tracing::debug!("Pokemon name already taken: {}", body.nome);
        return Err(BackendError::conflict(DUPLICATE_NAME_DETAIL));
    }

    let pokemon = db::insert_pokemon(&mut conn, &body, &owner.login)
        .await
        .map_err(map_write_error)?;

    tracing::info!(
        "Pokemon created: id={} nome={} dono={}",
        pokemon.id,
        pokemon.nome,
        pokemon.dono_login
    );
    Ok(pokemon)
}

/// List pokemon ordered by id
pub async fn list_pokemons(pool: &SqlitePool, skip: i64, limit: i64) -> BackendResult<Vec<Pokemon>> {
    let mut conn = pool.acquire().await?;
    Ok(db::list_pokemons(&mut conn, skip, limit).await?)
}

/// Get one pokemon
pub async fn get_pokemon(pool: &SqlitePool, id: i64) -> BackendResult<Pokemon> {
    let mut conn = pool.acquire().await?;
    db::get_pokemon_by_id(&mut conn, id).await?.ok_or_else(not_found)
}

/// Replace the fields of an existing pokemon
///
/// The owner is never reassigned. Renaming onto a taken name is a `Conflict`.
pub async fn update_pokemon(
    pool: &SqlitePool,
    caller: &User,
    id: i64,
    body: PokemonCreate,
) -> BackendResult<Pokemon> {
    body.validate()?;

    let mut conn = pool.acquire().await?;

    let updated = db::update_pokemon(&mut conn, id, &body)
        .await
        .map_err(map_write_error)?
        .ok_or_else(not_found)?;

    log_foreign_mutation("update", caller, &updated);
    tracing::info!("Pokemon updated: id={} nome={}", updated.id, updated.nome);
    Ok(updated)
}

/// Delete a pokemon
pub async fn delete_pokemon(pool: &SqlitePool, caller: &User, id: i64) -> BackendResult<()> {
    let mut conn = pool.acquire().await?;

    let deleted = db::delete_pokemon(&mut conn, id).await?.ok_or_else(not_found)?;

    log_foreign_mutation("delete", caller, &deleted);
    tracing::info!("Pokemon deleted: id={}", id);
    Ok(())
}

fn log_foreign_mutation(action: &str, caller: &User, pokemon: &Pokemon) {
    if caller.login != pokemon.dono_login {
        tracing::info!(
            "User {} performed {} on pokemon {} owned by {}",
            caller.login,
            action,
            pokemon.id,
            pokemon.dono_login
        );
    }
}
