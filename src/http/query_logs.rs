use std::time::Duration;

use tracing::{error, info};

use crate::{documents::Game, Status};

use super::models;

pub struct SearchEvent {
    request: models::Search,
}

impl SearchEvent {
    pub fn new(request: &models::Search) -> Self {
        Self {
            request: request.clone(),
        }
    }

    pub fn log(self, latency: Duration, response: &[Game]) {
        info!(
            http_request.request_method = "POST",
            http_request.request_url = "/search",
            labels.log_type = QUERY_LOGS,
            labels.handler = SEARCH_HANDLER,
            request.query = self.request.query,
            request.page = self.request.page,
            search.latency = latency.as_millis(),
            response.games = response.len(),
            "search '{}'",
            self.request.query
        )
    }

    pub fn log_error(self, latency: Duration, status: Status) {
        error!(
            http_request.request_method = "POST",
            http_request.request_url = "/search",
            labels.log_type = QUERY_LOGS,
            labels.handler = SEARCH_HANDLER,
            labels.status = status.to_string(),
            request.query = self.request.query,
            search.latency = latency.as_millis(),
            "search '{}'",
            self.request.query
        )
    }
}

pub struct GamesEvent {
    request: models::GamesOp,
}

impl GamesEvent {
    pub fn new(request: &models::GamesOp) -> Self {
        Self {
            request: request.clone(),
        }
    }

    pub fn log(self, latency: Duration, response: &[Game], filters_applied: bool) {
        info!(
            http_request.request_method = "POST",
            http_request.request_url = "/games",
            labels.log_type = QUERY_LOGS,
            labels.handler = GAMES_HANDLER,
            request.search = self.request.search,
            request.page = self.request.page,
            games.latency = latency.as_millis(),
            games.filters_applied = filters_applied,
            response.games = response.len(),
            "games for '{}'",
            self.request.user_id
        )
    }

    pub fn log_error(self, latency: Duration, status: Status) {
        error!(
            http_request.request_method = "POST",
            http_request.request_url = "/games",
            labels.log_type = QUERY_LOGS,
            labels.handler = GAMES_HANDLER,
            labels.status = status.to_string(),
            request.search = self.request.search,
            games.latency = latency.as_millis(),
            "games for '{}'",
            self.request.user_id
        )
    }
}

pub struct DetailsEvent {
    game_id: u64,
}

impl DetailsEvent {
    pub fn new(request: &models::DetailsOp) -> Self {
        Self {
            game_id: request.game_id,
        }
    }

    pub fn log(self, latency: Duration, available: bool) {
        info!(
            http_request.request_method = "POST",
            http_request.request_url = "/details",
            labels.log_type = QUERY_LOGS,
            labels.handler = DETAILS_HANDLER,
            request.game_id = self.game_id,
            details.latency = latency.as_millis(),
            details.available = available,
            "details for {}",
            self.game_id
        )
    }
}

pub struct ToggleEvent {
    user_id: String,
    game_id: u64,
}

impl ToggleEvent {
    pub fn new(request: &models::ToggleOp) -> Self {
        Self {
            user_id: request.user_id.clone(),
            game_id: request.game.id,
        }
    }

    pub fn log(self, latency: Duration, is_favorite: bool) {
        info!(
            http_request.request_method = "POST",
            http_request.request_url = "/library/toggle",
            labels.log_type = QUERY_LOGS,
            labels.handler = TOGGLE_HANDLER,
            request.game_id = self.game_id,
            toggle.latency = latency.as_millis(),
            toggle.is_favorite = is_favorite,
            "toggle {} for '{}'",
            self.game_id,
            self.user_id
        )
    }

    pub fn log_error(self, latency: Duration, status: Status) {
        error!(
            http_request.request_method = "POST",
            http_request.request_url = "/library/toggle",
            labels.log_type = QUERY_LOGS,
            labels.handler = TOGGLE_HANDLER,
            labels.status = status.to_string(),
            request.game_id = self.game_id,
            toggle.latency = latency.as_millis(),
            "toggle {} for '{}'",
            self.game_id,
            self.user_id
        )
    }
}

pub struct FavoriteStatusEvent {
    user_id: String,
    game_id: u64,
}

impl FavoriteStatusEvent {
    pub fn new(request: &models::FavoriteStatusOp) -> Self {
        Self {
            user_id: request.user_id.clone(),
            game_id: request.game_id,
        }
    }

    pub fn log(self, latency: Duration, is_favorite: bool) {
        info!(
            http_request.request_method = "POST",
            http_request.request_url = "/library/status",
            labels.log_type = QUERY_LOGS,
            labels.handler = STATUS_HANDLER,
            request.game_id = self.game_id,
            status.latency = latency.as_millis(),
            status.is_favorite = is_favorite,
            "favorite status of {} for '{}'",
            self.game_id,
            self.user_id
        )
    }

    pub fn log_error(self, latency: Duration, status: Status) {
        error!(
            http_request.request_method = "POST",
            http_request.request_url = "/library/status",
            labels.log_type = QUERY_LOGS,
            labels.handler = STATUS_HANDLER,
            labels.status = status.to_string(),
            request.game_id = self.game_id,
            status.latency = latency.as_millis(),
            "favorite status of {} for '{}'",
            self.game_id,
            self.user_id
        )
    }
}

pub struct FavoritesEvent {
    user_id: String,
}

impl FavoritesEvent {
    pub fn new(request: &models::UserOp) -> Self {
        Self {
            user_id: request.user_id.clone(),
        }
    }

    pub fn log(self, latency: Duration, entries: usize) {
        info!(
            http_request.request_method = "POST",
            http_request.request_url = "/library/list",
            labels.log_type = QUERY_LOGS,
            labels.handler = FAVORITES_HANDLER,
            favorites.latency = latency.as_millis(),
            response.entries = entries,
            "favorites of '{}'",
            self.user_id
        )
    }

    pub fn log_error(self, latency: Duration, status: Status) {
        error!(
            http_request.request_method = "POST",
            http_request.request_url = "/library/list",
            labels.log_type = QUERY_LOGS,
            labels.handler = FAVORITES_HANDLER,
            labels.status = status.to_string(),
            favorites.latency = latency.as_millis(),
            "favorites of '{}'",
            self.user_id
        )
    }
}

pub struct FiltersEvent {
    user_id: String,
    op: &'static str,
}

impl FiltersEvent {
    pub fn save(user_id: &str) -> Self {
        Self {
            user_id: String::from(user_id),
            op: "save",
        }
    }

    pub fn load(user_id: &str) -> Self {
        Self {
            user_id: String::from(user_id),
            op: "load",
        }
    }

    pub fn reset(user_id: &str) -> Self {
        Self {
            user_id: String::from(user_id),
            op: "reset",
        }
    }

    pub fn log(self, latency: Duration, is_custom: bool) {
        info!(
            http_request.request_method = "POST",
            http_request.request_url = "/filters",
            labels.log_type = QUERY_LOGS,
            labels.handler = FILTERS_HANDLER,
            request.op = self.op,
            filters.latency = latency.as_millis(),
            filters.is_custom = is_custom,
            "filters {} for '{}'",
            self.op,
            self.user_id
        )
    }

    pub fn log_error(self, latency: Duration, status: Status) {
        error!(
            http_request.request_method = "POST",
            http_request.request_url = "/filters",
            labels.log_type = QUERY_LOGS,
            labels.handler = FILTERS_HANDLER,
            labels.status = status.to_string(),
            request.op = self.op,
            filters.latency = latency.as_millis(),
            "filters {} for '{}'",
            self.op,
            self.user_id
        )
    }
}

pub struct ProfileEvent {
    user_id: String,
    op: &'static str,
}

impl ProfileEvent {
    pub fn save(user_id: &str) -> Self {
        Self {
            user_id: String::from(user_id),
            op: "save",
        }
    }

    pub fn load(user_id: &str) -> Self {
        Self {
            user_id: String::from(user_id),
            op: "load",
        }
    }

    pub fn log(self, latency: Duration) {
        info!(
            http_request.request_method = "POST",
            http_request.request_url = "/profile",
            labels.log_type = QUERY_LOGS,
            labels.handler = PROFILE_HANDLER,
            request.op = self.op,
            profile.latency = latency.as_millis(),
            "profile {} for '{}'",
            self.op,
            self.user_id
        )
    }

    pub fn log_error(self, latency: Duration, status: Status) {
        error!(
            http_request.request_method = "POST",
            http_request.request_url = "/profile",
            labels.log_type = QUERY_LOGS,
            labels.handler = PROFILE_HANDLER,
            labels.status = status.to_string(),
            request.op = self.op,
            profile.latency = latency.as_millis(),
            "profile {} for '{}'",
            self.op,
            self.user_id
        )
    }
}

const QUERY_LOGS: &str = "query_logs";
const SEARCH_HANDLER: &str = "search";
const GAMES_HANDLER: &str = "games";
const DETAILS_HANDLER: &str = "details";
const TOGGLE_HANDLER: &str = "toggle";
const STATUS_HANDLER: &str = "favorite_status";
const FAVORITES_HANDLER: &str = "favorites";
const FILTERS_HANDLER: &str = "filters";
const PROFILE_HANDLER: &str = "profile";
