use firestore::FirestoreDb;

use crate::Status;

pub struct FirestoreApi {
    db: FirestoreDb,
}

impl FirestoreApi {
    pub async fn connect() -> Result<Self, Status> {
        Ok(FirestoreApi {
            db: FirestoreDb::new(PROJECT_ID).await?,
        })
    }

    pub fn db(&self) -> &FirestoreDb {
        &self.db
    }
}

const PROJECT_ID: &str = "playdex-library";
