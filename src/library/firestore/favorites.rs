use crate::{
    api::FirestoreApi,
    documents::{FavoriteEntry, Favorites},
    Status,
};
use tracing::instrument;

#[instrument(name = "favorites::read", level = "trace", skip(firestore, user_id))]
pub async fn read(firestore: &FirestoreApi, user_id: &str) -> Result<Favorites, Status> {
    let parent_path = firestore.db().parent_path(USERS, user_id)?;

    let doc = firestore
        .db()
        .fluent()
        .select()
        .by_id_in(GAMES)
        .parent(&parent_path)
        .obj()
        .one(FAVORITES_DOC)
        .await?;

    match doc {
        Some(doc) => Ok(doc),
        None => Ok(Favorites { entries: vec![] }),
    }
}

#[instrument(
    name = "favorites::write",
    level = "trace",
    skip(firestore, user_id, favorites)
)]
pub async fn write(
    firestore: &FirestoreApi,
    user_id: &str,
    mut favorites: Favorites,
) -> Result<(), Status> {
    favorites.entries.sort_by(|l, r| r.added.cmp(&l.added));

    let parent_path = firestore.db().parent_path(USERS, user_id)?;

    firestore
        .db()
        .fluent()
        .update()
        .in_col(GAMES)
        .document_id(FAVORITES_DOC)
        .parent(&parent_path)
        .object(&favorites)
        .execute::<()>()
        .await?;
    Ok(())
}

/// Returns false without touching storage if the game is already a favorite.
#[instrument(
    name = "favorites::add_entry",
    level = "trace",
    skip(firestore, user_id, entry),
    fields(
        game_id = %entry.id
    ),
)]
pub async fn add_entry(
    firestore: &FirestoreApi,
    user_id: &str,
    entry: FavoriteEntry,
) -> Result<bool, Status> {
    let mut favorites = read(firestore, user_id).await?;
    match add(entry, &mut favorites) {
        true => {
            write(firestore, user_id, favorites).await?;
            Ok(true)
        }
        false => Ok(false),
    }
}

/// Returns whether an entry for `game_id` was found and deleted.
#[instrument(
    name = "favorites::remove_entry",
    level = "trace",
    skip(firestore, user_id)
)]
pub async fn remove_entry(
    firestore: &FirestoreApi,
    user_id: &str,
    game_id: u64,
) -> Result<bool, Status> {
    let mut favorites = read(firestore, user_id).await?;
    match remove(game_id, &mut favorites) {
        true => {
            write(firestore, user_id, favorites).await?;
            Ok(true)
        }
        false => Ok(false),
    }
}

#[instrument(
    name = "favorites::contains",
    level = "trace",
    skip(firestore, user_id)
)]
pub async fn contains(
    firestore: &FirestoreApi,
    user_id: &str,
    game_id: u64,
) -> Result<bool, Status> {
    let favorites = read(firestore, user_id).await?;
    Ok(favorites.entries.iter().any(|entry| entry.id == game_id))
}

/// Adds `FavoriteEntry` unless an entry for the same game exists.
fn add(entry: FavoriteEntry, favorites: &mut Favorites) -> bool {
    match favorites.entries.iter().find(|e| e.id == entry.id) {
        Some(_) => false,
        None => {
            favorites.entries.push(entry);
            true
        }
    }
}

/// Removes the entry keyed by `game_id`. Returns true if it was present.
fn remove(game_id: u64, favorites: &mut Favorites) -> bool {
    let original_len = favorites.entries.len();
    favorites.entries.retain(|e| e.id != game_id);
    favorites.entries.len() != original_len
}

const USERS: &str = "users";
const GAMES: &str = "games";
const FAVORITES_DOC: &str = "favorites";

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64) -> FavoriteEntry {
        FavoriteEntry {
            id,
            name: format!("game {id}"),
            added: id * 100,
            ..Default::default()
        }
    }

    #[test]
    fn add_in_empty_favorites() {
        let mut favorites = Favorites { entries: vec![] };

        assert!(add(entry(7), &mut favorites));
        assert_eq!(favorites.entries.len(), 1);
    }

    #[test]
    fn add_same_game_is_a_noop() {
        let mut favorites = Favorites {
            entries: vec![entry(7)],
        };

        assert_eq!(add(entry(7), &mut favorites), false);
        assert_eq!(favorites.entries.len(), 1);
    }

    #[test]
    fn remove_non_existing_entry() {
        let mut favorites = Favorites {
            entries: vec![entry(3)],
        };

        assert_eq!(remove(7, &mut favorites), false);
        assert_eq!(favorites.entries.len(), 1);
    }

    #[test]
    fn remove_existing_entry() {
        let mut favorites = Favorites {
            entries: vec![entry(7), entry(3)],
        };

        assert!(remove(7, &mut favorites));
        assert_eq!(favorites.entries.len(), 1);
        assert_eq!(favorites.entries[0].id, 3);
    }

    #[test]
    fn toggle_twice_restores_membership() {
        let mut favorites = Favorites {
            entries: vec![entry(3)],
        };

        assert!(add(entry(7), &mut favorites));
        assert!(remove(7, &mut favorites));
        assert_eq!(favorites.entries.len(), 1);
        assert_eq!(favorites.entries[0].id, 3);

        assert!(remove(3, &mut favorites));
        assert!(add(entry(3), &mut favorites));
        assert_eq!(favorites.entries.len(), 1);
        assert_eq!(favorites.entries[0].id, 3);
    }
}
