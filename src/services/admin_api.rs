//! admin_api.rs
//!
//! Клиент административного API кинотеатра.
//!
//! 1.  **AdminApi**: трейт на границе редактора и сети. Редактор знает только его,
//!     поэтому в тестах его легко подменить.
//! 2.  **HttpAdminApi**: реализация поверх `reqwest`. Тело ответа разбирается
//!     независимо от HTTP-статуса: сервер кладёт описание ошибки в JSON
//!     даже при 401/404.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::multipart::{Form, Part};
use tokio::time::Duration;
use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::error::{EditorError, EditorResult};
use crate::models::seat::SeatTypeRequest;
use crate::models::{MovieId, RoomId, SeatGridPayload, SeatId, SeatType, SeatTypeUpdate};

const ADMIN_DASHBOARD_PATH: &str = "/admin";

/// Файл афиши для загрузки.
#[derive(Debug, Clone)]
pub struct PosterFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Сетевые операции, от которых зависит редактор.
#[async_trait]
pub trait AdminApi: Send + Sync + 'static {
    /// `GET /api/room/{room_id}/seats`
    async fn fetch_room_seats(&self, room_id: RoomId) -> EditorResult<SeatGridPayload>;

    /// `PUT /api/seat/{seat_id}/type`
    async fn update_seat_type(&self, seat_id: SeatId, seat_type: &SeatType) -> EditorResult<SeatTypeUpdate>;

    /// `POST /admin/movie/{movie_id}/poster/upload`. Ok только при успешном статусе.
    async fn upload_poster(&self, movie_id: MovieId, poster: PosterFile) -> EditorResult<()>;

    /// `POST /admin/movie/{movie_id}/poster/delete`. Ok только при успешном статусе.
    async fn delete_poster(&self, movie_id: MovieId) -> EditorResult<()>;
}

/// HTTP-клиент административного API.
#[derive(Clone)]
pub struct HttpAdminApi {
    /// Базовый URL сервера администрирования.
    base_url: String,
    /// Асинхронный HTTP-клиент.
    http_client: reqwest::Client,
}

impl HttpAdminApi {
    /// Создаёт клиент на основе настроек.
    pub fn from_config(config: &ApiConfig) -> EditorResult<Self> {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = &config.session_cookie {
            // Невалидное значение заголовка просто не отправляем.
            if let Ok(value) = HeaderValue::from_str(cookie) {
                headers.insert(COOKIE, value);
            }
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .cookie_store(true)
            .default_headers(headers)
            .build()?;

        info!("Admin API client configured for {}", config.base_url);

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Разбирает тело ответа как JSON вне зависимости от статуса.
    async fn read_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> EditorResult<T> {
        let status = response.status();
        let body = response.bytes().await?;
        debug!("Admin API answered {} with {} bytes", status, body.len());
        Ok(serde_json::from_slice(&body)?)
    }

    /// Форма афиши подтверждена, только если сервер ответил успешным статусом
    /// и после редиректов мы остались на самой форме или на дашборде `/admin`.
    /// Редирект на `/login` означает, что сессия истекла и ничего не изменилось.
    fn poster_outcome(response: reqwest::Response, request_path: &str) -> EditorResult<()> {
        let status = response.status();
        if !status.is_success() {
            return Err(EditorError::PosterStatus(status.as_u16()));
        }

        let final_path = response.url().path().trim_end_matches('/');
        if final_path.ends_with(request_path) || final_path.ends_with(ADMIN_DASHBOARD_PATH) {
            Ok(())
        } else {
            Err(EditorError::PosterNotConfirmed(final_path.to_string()))
        }
    }
}

#[async_trait]
impl AdminApi for HttpAdminApi {
    async fn fetch_room_seats(&self, room_id: RoomId) -> EditorResult<SeatGridPayload> {
        let response = self
            .http_client
            .get(format!("{}/api/room/{}/seats", self.base_url, room_id))
            .send()
            .await?;

        Self::read_json(response).await
    }

    async fn update_seat_type(&self, seat_id: SeatId, seat_type: &SeatType) -> EditorResult<SeatTypeUpdate> {
        let request = SeatTypeRequest { seat_type: seat_type.as_str() };

        let response = self
            .http_client
            .put(format!("{}/api/seat/{}/type", self.base_url, seat_id))
            .json(&request)
            .send()
            .await?;

        Self::read_json(response).await
    }

    async fn upload_poster(&self, movie_id: MovieId, poster: PosterFile) -> EditorResult<()> {
        let part = Part::bytes(poster.bytes)
            .file_name(poster.file_name)
            .mime_str(&poster.content_type)?;
        let form = Form::new().part("poster", part);

        let request_path = format!("/admin/movie/{}/poster/upload", movie_id);
        let response = self
            .http_client
            .post(format!("{}{}", self.base_url, request_path))
            .multipart(form)
            .send()
            .await?;

        Self::poster_outcome(response, &request_path)
    }

    async fn delete_poster(&self, movie_id: MovieId) -> EditorResult<()> {
        let request_path = format!("/admin/movie/{}/poster/delete", movie_id);
        let response = self
            .http_client
            .post(format!("{}{}", self.base_url, request_path))
            .send()
            .await?;

        Self::poster_outcome(response, &request_path)
    }
}
