//! Route handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;

use crate::error::{Result, ZooError};
use crate::model::Animal;
use crate::query::AnimalQuery;
use crate::store::AnimalStore;

use super::extract::AnimalBody;

/// `GET /api/animals`
pub async fn list_animals(
    State(store): State<Arc<AnimalStore>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Animal>>> {
    let query = AnimalQuery::from_pairs(pairs);
    let animals = blocking("list", move || Ok(store.list(&query))).await?;
    tracing::debug!("List matched {} animals", animals.len());
    Ok(Json(animals))
}

/// `GET /api/animals/:id`
pub async fn get_animal(
    State(store): State<Arc<AnimalStore>>,
    Path(id): Path<String>,
) -> Result<Json<Animal>> {
    blocking("get", move || store.get(&id)).await.map(Json)
}

/// `POST /api/animals`
pub async fn create_animal(
    State(store): State<Arc<AnimalStore>>,
    AnimalBody(draft): AnimalBody,
) -> Result<Json<Animal>> {
    blocking("create", move || store.create(draft))
        .await
        .map(Json)
}

/// Run a store call on the blocking pool
///
/// `create` holds the write lock across the document rewrite, so reads can
/// wait on disk too.
async fn blocking<T, F>(op: &'static str, f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ZooError::Storage(format!("{} task failed: {}", op, e)))?
}
