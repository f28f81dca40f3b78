//! Unique identifiers for test isolation.
//!
//! Leaderboard state is shared by every request against one app, so tests
//! that rank players use ULID-suffixed ids to avoid colliding.

use ulid::Ulid;

/// `{prefix}-{ulid}`
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("player");
/// assert!(a.starts_with("player-"));
/// assert_ne!(a, unique_str("player"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Player id for leaderboard tests.
pub fn unique_player_id() -> String {
    unique_str("player")
}

/// Display name short enough to read in failure output.
pub fn unique_name(prefix: &str) -> String {
    let ulid = Ulid::new().to_string();
    format!("{prefix} {}", &ulid[ulid.len() - 6..])
}
