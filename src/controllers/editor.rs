use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::models::{MovieId, SeatId};
use crate::services::admin_api::PosterFile;
use crate::view::html::render_page;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(show_page))
        .route("/room", post(select_room))
        .route("/seats/{seat_id}/click", post(click_seat))
        .route("/movie/{movie_id}/poster/upload", post(upload_poster))
        .route("/movie/{movie_id}/poster/delete", post(delete_poster))
}

/* ---------- PAGE ---------- */

// GET /
async fn show_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, (StatusCode, String)> {
    let alerts = state.alerts.drain();
    let page = state.editor.snapshot();

    render_page(&page, &alerts, &state.config.page.poster_movie_ids)
        .map(Html)
        .map_err(|e| {
            error!("Failed to render admin page: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Impossible d'afficher la page".to_string())
        })
}

/* ---------- ROOM SELECTION ---------- */

#[derive(Debug, Deserialize)]
struct RoomForm {
    #[serde(default)]
    room_id: String,
    #[serde(default)]
    room_name: String,
}

// POST /room
async fn select_room(State(state): State<Arc<AppState>>, Form(form): Form<RoomForm>) -> Redirect {
    match state.editor.on_room_change(&form.room_id, &form.room_name).await {
        Ok(outcome) => debug!("Room selection {:?}: {:?}", form.room_id, outcome),
        // Администратор уже получил alert
        Err(e) => debug!("Room selection {:?} failed: {}", form.room_id, e),
    }
    Redirect::to("/")
}

/* ---------- SEATS ---------- */

// POST /seats/{seat_id}/click
async fn click_seat(State(state): State<Arc<AppState>>, Path(seat_id): Path<SeatId>) -> Redirect {
    match state.editor.click_seat(seat_id).await {
        Ok(outcome) => debug!(seat_id, "Seat click: {:?}", outcome),
        Err(e) => debug!(seat_id, "Seat click failed: {}", e),
    }
    Redirect::to("/")
}

/* ---------- POSTERS ---------- */

// POST /movie/{movie_id}/poster/upload
async fn upload_poster(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<MovieId>,
    multipart: Multipart,
) -> Redirect {
    let poster = read_poster_field(multipart).await;
    let action = format!("/movie/{}/poster/upload", movie_id);

    if let Err(e) = state.editor.submit_poster_form(&action, poster).await {
        debug!(movie_id, "Poster upload failed: {}", e);
    }
    Redirect::to("/")
}

// POST /movie/{movie_id}/poster/delete
async fn delete_poster(State(state): State<Arc<AppState>>, Path(movie_id): Path<MovieId>) -> Redirect {
    let action = format!("/movie/{}/poster/delete", movie_id);

    if let Err(e) = state.editor.submit_poster_form(&action, None).await {
        debug!(movie_id, "Poster delete failed: {}", e);
    }
    Redirect::to("/")
}

/// Достаёт файл из поля `poster`. Пустое поле (файл не выбран) даёт `None`.
async fn read_poster_field(mut multipart: Multipart) -> Option<PosterFile> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return None,
            Err(e) => {
                warn!("Malformed poster upload form: {}", e);
                return None;
            }
        };

        if field.name() != Some("poster") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        return match field.bytes().await {
            Ok(bytes) if !file_name.is_empty() => Some(PosterFile {
                file_name,
                content_type,
                bytes: bytes.to_vec(),
            }),
            Ok(_) => None,
            Err(e) => {
                warn!("Failed to read poster upload: {}", e);
                None
            }
        };
    }
}
