//! Person 处理器

use axum::{
    extract::{Path, State},
    response::Json,
};
use tracing::debug;

use super::model::Person;
use crate::app::AppState;
use crate::core::{CoreError, JsonBody};

/// GET /person/
pub async fn list_persons(State(state): State<AppState>) -> Result<Json<Vec<Person>>, CoreError> {
    let people = state.persons.fetch_all().await?;
    Ok(Json(people))
}

/// GET /person/{name}
pub async fn get_person(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Person>, CoreError> {
    let person = state.persons.fetch_by_name(&name).await?;
    debug!(?person, %name, "person found");
    Ok(Json(person))
}

/// POST /person/
pub async fn add_person(
    State(state): State<AppState>,
    JsonBody(person): JsonBody<Person>,
) -> Result<Json<i64>, CoreError> {
    debug!(?person, "body");
    let id = state.persons.insert(&person).await?;
    Ok(Json(id))
}
