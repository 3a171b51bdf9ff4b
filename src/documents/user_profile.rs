use serde::{Deserialize, Serialize};

/// Document under 'users/{user_id}/prefs' with the user's editable profile.
///
/// `favorite_class_time` is the `HH:MM` anchor clients use to schedule their
/// daily reminder. Scheduling itself is a client concern.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct UserProfile {
    #[serde(default)]
    pub full_name: String,

    #[serde(default)]
    pub avatar_uri: String,

    #[serde(default)]
    pub resume_url: String,

    #[serde(default)]
    pub job_title: String,

    #[serde(default)]
    pub favorite_class_time: String,
}
