//! Shared constants for instsync.

/// Environment variable holding the PostgreSQL connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Environment variable overriding the pool size.
pub const PG_MAX_CONNECTIONS_VAR: &str = "INSTSYNC_PG_MAX_CONNECTIONS";

/// Environment variable overriding the pool acquire timeout.
pub const PG_ACQUIRE_TIMEOUT_VAR: &str = "INSTSYNC_PG_ACQUIRE_TIMEOUT_SECS";

/// PostgreSQL connection pool: maximum connections.
/// A sync only ever holds one connection at a time.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 2;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Placeholder avatar service used for generated logos.
pub const LOGO_SERVICE_BASE_URL: &str = "https://ui-avatars.com/api/";

/// Fixed query parameters appended after the `name` parameter.
pub const LOGO_SERVICE_PARAMS: &str = "size=200&background=0D47A1&color=fff&format=png";

/// Maximum number of initials rendered into a logo.
pub const LOGO_MAX_INITIALS: usize = 3;
