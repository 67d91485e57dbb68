use mongodb::bson::oid::ObjectId;
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use rand::{distributions::uniform::SampleUniform, thread_rng, Rng};
use std::time::{SystemTime, UNIX_EPOCH};

use super::AppError;
use crate::constants::*;

/// Get EPOCH timestamp in seconds
pub fn get_epoch_ts() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(n) => n.as_secs(),
        Err(_) => panic!("SystemTime before UNIX EPOCH!"),
    }
}

/// Generate a random 6-digit OTP code in 100000..=999999
pub fn generate_otp() -> String {
    let otp = get_random_num(OTP_MIN_VALUE, OTP_MAX_VALUE + 1);
    otp.to_string()
}

/// Generate a random number in a given range
/// panics if the lower bound is greater than the higher bound
pub fn get_random_num<T>(low: T, high: T) -> T
where
    T: PartialEq + PartialOrd + SampleUniform,
{
    assert!(low < high);
    let mut rng = thread_rng();
    rng.gen_range(low..high)
}

/// Parse the given value as ObjectId
pub fn parse_object_id(id: &str, error_message: &str) -> Result<ObjectId, AppError> {
    let oid = ObjectId::parse_str(id).map_err(|err| {
        tracing::debug!("{:?}", err);
        AppError::Validation(error_message.into())
    })?;
    Ok(oid)
}

/// Whether the given database error is a unique index violation.
/// The votes collection relies on its (voterId, category) unique
/// index to keep at most one vote per voter and category when
/// concurrent casts race past the application-level check.
pub fn is_duplicate_key_error(err: &MongoError) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_err)) => {
            write_err.code == MONGO_DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}
