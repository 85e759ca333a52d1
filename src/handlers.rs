use crate::errors::ApiError;
use crate::models::{Entry, EntryReplacement, MessageResponse};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{
        OriginalUri, Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::Html,
};
use tracing::warn;

pub async fn index() -> Html<String> {
    Html(render_index())
}

pub async fn list_entries(State(state): State<AppState>) -> Result<Json<Vec<Entry>>, ApiError> {
    let entries = state.with_store(|store| store.list()).await.map_err(|err| {
        warn!("failed to list entries: {err}");
        ApiError::ListFailed
    })?;
    Ok(Json(entries))
}

pub async fn get_entry(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Entry>, ApiError> {
    let Path(id) = path.map_err(|rejection| {
        let id = lossy_last_segment(uri.path());
        warn!(%id, "rejected entry id: {rejection}");
        ApiError::FindFailed { id }
    })?;

    let lookup = id.clone();
    let entry = state
        .with_store(move |store| store.find(&lookup))
        .await
        .map_err(|err| {
            warn!(%id, "failed to find entry: {err}");
            ApiError::FindFailed { id: id.clone() }
        })?;
    Ok(Json(entry))
}

pub async fn create_entry(
    State(state): State<AppState>,
    payload: Result<Json<Entry>, JsonRejection>,
) -> Result<Json<Entry>, ApiError> {
    let Json(entry) = payload.map_err(|rejection| {
        warn!("rejected create payload: {rejection}");
        ApiError::CreateFailed
    })?;

    let id = entry.id.clone();
    let created = state
        .with_store(move |store| store.insert(&entry))
        .await
        .map_err(|err| {
            warn!(%id, "failed to create entry: {err}");
            ApiError::CreateFailed
        })?;
    Ok(Json(created))
}

pub async fn update_entry(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<EntryReplacement>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path.map_err(|rejection| {
        warn!("rejected update id: {rejection}");
        ApiError::UpdateFailed
    })?;
    let Json(replacement) = payload.map_err(|rejection| {
        warn!(%id, "rejected update payload: {rejection}");
        ApiError::UpdateFailed
    })?;
    let entry = replacement.into_entry(&id);

    let key = id.clone();
    state
        .with_store(move |store| store.replace(&key, &entry))
        .await
        .map_err(|err| {
            warn!(%id, "failed to update entry: {err}");
            ApiError::UpdateFailed
        })?;
    Ok(Json(MessageResponse::new("Updated successfully")))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path.map_err(|rejection| {
        warn!("rejected delete id: {rejection}");
        ApiError::DeleteFailed
    })?;

    let key = id.clone();
    state
        .with_store(move |store| store.remove(&key))
        .await
        .map_err(|err| {
            warn!(%id, "failed to delete entry: {err}");
            ApiError::DeleteFailed
        })?;
    Ok(Json(MessageResponse::new("Deleted successfully")))
}

/// Percent-decodes the final path segment, replacing invalid UTF-8.
fn lossy_last_segment(path: &str) -> String {
    let segment = path.rsplit('/').next().unwrap_or_default();
    String::from_utf8_lossy(&urlencoding::decode_binary(segment.as_bytes())).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_segment_is_decoded_lossily() {
        assert_eq!(lossy_last_segment("/get/a%20b"), "a b");
        assert_eq!(lossy_last_segment("/get/%FF"), "\u{FFFD}");
        assert_eq!(lossy_last_segment("/get/"), "");
    }
}
