use crate::{api::FirestoreApi, documents::UserProfile, Status};
use tracing::instrument;

/// A missing document reads as an empty profile.
#[instrument(name = "profile::read", level = "trace", skip(firestore, user_id))]
pub async fn read(firestore: &FirestoreApi, user_id: &str) -> Result<UserProfile, Status> {
    let parent_path = firestore.db().parent_path(USERS, user_id)?;

    let doc = firestore
        .db()
        .fluent()
        .select()
        .by_id_in(PREFS)
        .parent(&parent_path)
        .obj()
        .one(PROFILE_DOC)
        .await?;

    match doc {
        Some(doc) => Ok(doc),
        None => Ok(UserProfile::default()),
    }
}

#[instrument(
    name = "profile::write",
    level = "trace",
    skip(firestore, user_id, profile)
)]
pub async fn write(
    firestore: &FirestoreApi,
    user_id: &str,
    profile: &UserProfile,
) -> Result<(), Status> {
    let parent_path = firestore.db().parent_path(USERS, user_id)?;

    firestore
        .db()
        .fluent()
        .update()
        .in_col(PREFS)
        .document_id(PROFILE_DOC)
        .parent(&parent_path)
        .object(profile)
        .execute::<()>()
        .await?;
    Ok(())
}

const USERS: &str = "users";
const PREFS: &str = "prefs";
const PROFILE_DOC: &str = "profile";
