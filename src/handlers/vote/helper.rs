use mongodb::bson::doc;
use std::sync::Arc;

use crate::{
    constants::*,
    models::{Voter, VotingSession},
    utils::AppError,
};

#[cfg(test)]
use mockall_double::double;

#[cfg_attr(test, double)]
use crate::database::AppDatabase;

/// The voting window is open when any session is currently active
pub async fn check_voting_open(db: &Arc<AppDatabase>) -> Result<(), AppError> {
    let filter = Some(doc! {"isActive": true});
    let session = db
        .find_one::<VotingSession>(DB_NAME, COLL_VOTING_SESSIONS, filter, None)
        .await?;
    if session.is_none() {
        let err = AppError::Validation("Voting is currently closed".into());
        return Err(err);
    }
    Ok(())
}

/// Look up a voter record by its normalized phone number
pub async fn find_voter_by_phone(
    db: &Arc<AppDatabase>,
    phone: &str,
) -> Result<Option<Voter>, AppError> {
    let filter = Some(doc! {"phoneNumber": phone});
    let voter = db
        .find_one::<Voter>(DB_NAME, COLL_VOTERS, filter, None)
        .await?;
    Ok(voter)
}
