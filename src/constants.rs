pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const MONGO_MIN_POOL_SIZE: u32 = 5;
pub const MONGO_MAX_POOL_SIZE: u32 = 10;
pub const MONGO_CONN_TIMEOUT: u64 = 10;
pub const OTP_LENGTH: usize = 6;
pub const OTP_MIN_VALUE: u32 = 100_000;
pub const OTP_MAX_VALUE: u32 = 999_999;
pub const OTP_VALIDITY_MINS: u64 = 10;
pub const PHONE_MIN_LEN: usize = 8;
pub const PHONE_MAX_LEN: usize = 15;
pub const MONGO_DUPLICATE_KEY_CODE: i32 = 11000;

pub const ADMIN_ROLE: &str = "admin";

pub const DB_NAME: &str = "pageantvote";

pub const COLL_VOTERS: &str = "voters";
pub const COLL_VOTES: &str = "votes";
pub const COLL_CONTESTANTS: &str = "contestants";
pub const COLL_VOTING_SESSIONS: &str = "votingSessions";
pub const COLL_USER_ROLES: &str = "userRoles";
