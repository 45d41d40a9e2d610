//! Category listing endpoint.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use axum::{
    Json,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde_json::json;

use crate::{
    AppState, Error,
    category::{Category, CategoryId, db::get_all_categories},
};

/// The state needed for listing categories.
#[derive(Debug, Clone)]
pub struct ListCategoriesState {
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ListCategoriesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle requests for the category list.
///
/// Responds with `{"categories": {id: type}}`. An empty category table is a
/// not-found error rather than an empty map.
pub async fn get_categories(
    State(state): State<ListCategoriesState>,
) -> Result<Response, Error> {
    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    let categories = get_all_categories(&connection)?;

    if categories.is_empty() {
        return Err(Error::NotFound);
    }

    Ok(Json(json!({ "categories": category_map(&categories) })).into_response())
}

/// Map category IDs to display names for the wire format, where JSON object
/// keys are strings.
pub(crate) fn category_map(categories: &[Category]) -> BTreeMap<CategoryId, String> {
    categories
        .iter()
        .map(|category| (category.id, category.name.clone()))
        .collect()
}
