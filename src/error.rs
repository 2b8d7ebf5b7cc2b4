use thiserror::Error;

/// Ошибки редактора мест.
///
/// Три класса, которые видит администратор:
/// 1. ошибка, о которой сообщил сервер (`Server`);
/// 2. сбой сети или разбора ответа (`Transport`, `Decode`, `PosterStatus`,
///    `PosterNotConfirmed`);
/// 3. отказ сервера сменить категорию места (`Rejected`).
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("server reported an error: {0}")]
    Server(String),

    #[error("admin API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed admin API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("seat type update rejected: {0}")]
    Rejected(String),

    #[error("poster request failed with HTTP status {0}")]
    PosterStatus(u16),

    #[error("poster request was not confirmed, server redirected to {0:?}")]
    PosterNotConfirmed(String),

    #[error("invalid room id {0:?}")]
    InvalidRoomId(String),

    #[error("form action {0:?} is not a poster upload or delete")]
    UnknownFormAction(String),

    #[error("poster upload submitted without a file")]
    MissingPosterFile,

    #[error("editor is detached")]
    Detached,
}

pub type EditorResult<T> = Result<T, EditorError>;
