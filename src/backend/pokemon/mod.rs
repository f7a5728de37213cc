//! Pokemon Module
//!
//! CRUD over the `pokemons` table.
//!
//! # Module Structure
//!
//! ```text
//! pokemon/
//! ├── mod.rs       - Module exports and documentation
//! ├── db.rs        - Record store (SQL on a held connection)
//! ├── service.rs   - Validation, uniqueness, not-found, owner logging
//! └── handlers.rs  - HTTP handlers
//! ```

pub mod db;

pub mod service;

pub mod handlers;

pub use handlers::{
    create_pokemon, delete_pokemon, get_pokemon, list_pokemons, update_pokemon, ListParams,
};
