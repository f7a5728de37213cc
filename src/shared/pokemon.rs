/**
 * Pokemon Data Structures
 *
 * This module defines the request and response bodies for the pokemon
 * endpoints, plus the codec that turns the `habilidades` list into the single
 * delimited column it is persisted as.
 *
 * # Habilidades Contract
 *
 * A record carries 1 to 3 habilidades. They are stored joined by
 * [`HABILIDADES_DELIMITER`], so an entry may never contain that character.
 * [`validate_habilidades`] enforces this before anything reaches the store,
 * which keeps [`encode_habilidades`] and [`decode_habilidades`] exact inverses
 * for every stored value.
 */
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Separator used when persisting habilidades as one column
pub const HABILIDADES_DELIMITER: char = ',';

/// Minimum number of habilidades per pokemon
pub const MIN_HABILIDADES: usize = 1;

/// Maximum number of habilidades per pokemon
pub const MAX_HABILIDADES: usize = 3;

/// Body of `POST /pokemons` and `PUT /pokemons/{id}`
///
/// # Example
/// ```rust
/// use pokedex::shared::PokemonCreate;
///
/// let body: PokemonCreate = serde_json::from_str(
///     r#"{"nome":"Pikachu","tipo":"Electric","habilidades":["Thunder Shock"]}"#,
/// ).unwrap();
/// assert!(body.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonCreate {
    /// Unique, human-chosen name
    pub nome: String,
    /// Free-form category tag
    pub tipo: String,
    /// Ordered list of 1 to 3 abilities
    pub habilidades: Vec<String>,
}

impl PokemonCreate {
    /// Check the invariants the store relies on
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_habilidades(&self.habilidades)
    }
}

/// A stored pokemon as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pokemon {
    /// System-assigned id
    pub id: i64,
    pub nome: String,
    pub tipo: String,
    pub habilidades: Vec<String>,
    /// Login of the user that created the record
    pub dono_login: String,
}

/// Validate a habilidades list
///
/// # Errors
///
/// Returns `SharedError::ValidationError` on field `habilidades` when:
/// - there are fewer than 1 or more than 3 entries
/// - an entry is empty or only whitespace
/// - an entry contains the `,` delimiter
pub fn validate_habilidades(habilidades: &[String]) -> Result<(), SharedError> {
    if habilidades.len() < MIN_HABILIDADES || habilidades.len() > MAX_HABILIDADES {
        return Err(SharedError::validation(
            "habilidades",
            format!(
                "expected between {} and {} entries, got {}",
                MIN_HABILIDADES,
                MAX_HABILIDADES,
                habilidades.len()
            ),
        ));
    }

    for (index, habilidade) in habilidades.iter().enumerate() {
        if habilidade.trim().is_empty() {
            return Err(SharedError::validation(
                "habilidades",
                format!("entry {} is blank", index),
            ));
        }
        if habilidade.contains(HABILIDADES_DELIMITER) {
            return Err(SharedError::validation(
                "habilidades",
                format!(
                    "entry {} must not contain '{}'",
                    index, HABILIDADES_DELIMITER
                ),
            ));
        }
    }

    Ok(())
}

/// Join habilidades into their stored form
pub fn encode_habilidades(habilidades: &[String]) -> String {
    habilidades.join(&HABILIDADES_DELIMITER.to_string())
}

/// Split a stored habilidades column back into the ordered list
pub fn decode_habilidades(stored: &str) -> Vec<String> {
    stored
        .split(HABILIDADES_DELIMITER)
        .map(str::to_string)
        .collect()
}
