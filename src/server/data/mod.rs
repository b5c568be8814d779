//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! entity models or tuples of related models to the service layer, which converts them
//! into domain models. All queries, inserts, updates and deletes go through these
//! repositories.

pub mod contact_person;
pub mod customer;
pub mod customer_adviser;
pub mod heartbeat;
pub mod license;
pub mod location;
pub mod software_module;
pub mod software_product;
pub mod software_update;
pub mod used_software_product;
pub mod user;

/// Case-insensitive match of `value` against an already lowercased `word`.
///
/// SQLite's `LIKE` only folds ASCII, so filters compare in Rust to match umlauts.
pub(crate) fn matches_word(value: &str, word: &str, contains: bool) -> bool {
    let value = value.to_lowercase();
    if contains {
        value.contains(word)
    } else {
        value == word
    }
}

#[cfg(test)]
mod test;
