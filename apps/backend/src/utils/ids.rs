//! Identifier generation for games and leaderboard entries.
//!
//! Ids are prefixed ULIDs: unique without coordination and sortable by
//! creation time.

use ulid::Ulid;

pub fn new_game_id() -> String {
    format!("game_{}", Ulid::new())
}

pub fn new_entry_id() -> String {
    format!("entry_{}", Ulid::new())
}
