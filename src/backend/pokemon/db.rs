//! Database operations for pokemon
//!
//! The record store: every function runs on a connection the caller already
//! holds, so a request keeps one handle for all of its statements and
//! releases it when that handle drops. Each write is a single statement, so
//! it is atomic on its own.
//!
//! `habilidades` is persisted as one comma-joined column; rows are mapped
//! back through `shared::pokemon::decode_habilidades`.

use sqlx::SqliteConnection;

use crate::shared::pokemon::{decode_habilidades, encode_habilidades, Pokemon, PokemonCreate};

/// Row of the `pokemons` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PokemonRow {
    pub id: i64,
    pub nome: String,
    pub tipo: String,
    pub habilidades: String,
    pub dono_login: String,
}

impl From<PokemonRow> for Pokemon {
    fn from(row: PokemonRow) -> Self {
        Pokemon {
            id: row.id,
            nome: row.nome,
            tipo: row.tipo,
            habilidades: decode_habilidades(&row.habilidades),
            dono_login: row.dono_login,
        }
    }
}

/// Insert a pokemon owned by `dono_login`
///
/// A taken `nome` fails with the store's UNIQUE violation.
pub async fn insert_pokemon(
    conn: &mut SqliteConnection,
    pokemon: &PokemonCreate,
    dono_login: &str,
) -> Result<Pokemon, sqlx::Error> {
    let row = sqlx::query_as::<_, PokemonRow>(
        r#"
        INSERT INTO pokemons (nome, tipo, habilidades, dono_login)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING id, nome, tipo, habilidades, dono_login
        "#,
    )
    .bind(&pokemon.nome)
    .bind(&pokemon.tipo)
    .bind(encode_habilidades(&pokemon.habilidades))
    .bind(dono_login)
    .fetch_one(conn)
    .await?;

    Ok(row.into())
}

/// Get a pokemon by id
pub async fn get_pokemon_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Pokemon>, sqlx::Error> {
    let row = sqlx::query_as::<_, PokemonRow>(
        r#"
        SELECT id, nome, tipo, habilidades, dono_login
        FROM pokemons
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(row.map(Pokemon::from))
}

/// Get a pokemon by its unique name
pub async fn get_pokemon_by_nome(
    conn: &mut SqliteConnection,
    nome: &str,
) -> Result<Option<Pokemon>, sqlx::Error> {
    let row = sqlx::query_as::<_, PokemonRow>(
        r#"
        SELECT id, nome, tipo, habilidades, dono_login
        FROM pokemons
        WHERE nome = ?1
        "#,
    )
    .bind(nome)
    .fetch_optional(conn)
    .await?;

    Ok(row.map(Pokemon::from))
}

/// List pokemon ordered by id, skipping `skip` rows and returning at most `limit`
pub async fn list_pokemons(
    conn: &mut SqliteConnection,
    skip: i64,
    limit: i64,
) -> Result<Vec<Pokemon>, sqlx::Error> {
    let rows = sqlx::query_as::<_, PokemonRow>(
        r#"
        SELECT id, nome, tipo, habilidades, dono_login
        FROM pokemons
        ORDER BY id
        LIMIT ?1 OFFSET ?2
        "#,
    )
    .bind(limit)
    .bind(skip)
    .fetch_all(conn)
    .await?;

    Ok(rows.into_iter().map(Pokemon::from).collect())
}

/// Replace `nome`, `tipo` and `habilidades` of a pokemon; the owner is untouched
///
/// Returns `None` when no row has this id.
pub async fn update_pokemon(
    conn: &mut SqliteConnection,
    id: i64,
    pokemon: &PokemonCreate,
) -> Result<Option<Pokemon>, sqlx::Error> {
    let row = sqlx::query_as::<_, PokemonRow>(
        r#"
        UPDATE pokemons
        SET nome = ?1, tipo = ?2, habilidades = ?3
        WHERE id = ?4
        RETURNING id, nome, tipo, habilidades, dono_login
        "#,
    )
    .bind(&pokemon.nome)
    .bind(&pokemon.tipo)
    .bind(encode_habilidades(&pokemon.habilidades))
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(row.map(Pokemon::from))
}

/// Delete a pokemon and return the removed row
pub async fn delete_pokemon(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Pokemon>, sqlx::Error> {
    let row = sqlx::query_as::<_, PokemonRow>(
        r#"
        DELETE FROM pokemons
        WHERE id = ?1
        RETURNING id, nome, tipo, habilidades, dono_login
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(row.map(Pokemon::from))
}
