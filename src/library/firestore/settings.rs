use crate::{api::FirestoreApi, documents::FilterSettings, Status};
use tracing::instrument;

/// A missing document reads as the default (no filter) settings.
#[instrument(name = "settings::read", level = "trace", skip(firestore, user_id))]
pub async fn read(firestore: &FirestoreApi, user_id: &str) -> Result<FilterSettings, Status> {
    let parent_path = firestore.db().parent_path(USERS, user_id)?;

    let doc = firestore
        .db()
        .fluent()
        .select()
        .by_id_in(PREFS)
        .parent(&parent_path)
        .obj()
        .one(FILTERS_DOC)
        .await?;

    match doc {
        Some(doc) => Ok(doc),
        None => Ok(FilterSettings::default()),
    }
}

#[instrument(
    name = "settings::write",
    level = "trace",
    skip(firestore, user_id, settings)
)]
pub async fn write(
    firestore: &FirestoreApi,
    user_id: &str,
    settings: &FilterSettings,
) -> Result<(), Status> {
    let parent_path = firestore.db().parent_path(USERS, user_id)?;

    firestore
        .db()
        .fluent()
        .update()
        .in_col(PREFS)
        .document_id(FILTERS_DOC)
        .parent(&parent_path)
        .object(settings)
        .execute::<()>()
        .await?;
    Ok(())
}

const USERS: &str = "users";
const PREFS: &str = "prefs";
const FILTERS_DOC: &str = "filters";
