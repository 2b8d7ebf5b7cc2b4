use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::models::MovieId;

/// Что делает форма афиши.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterAction {
    Upload,
    Delete,
}

/// Разобранный `action` формы афиши.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosterForm {
    pub movie_id: MovieId,
    pub action: PosterAction,
}

impl PosterForm {
    /// Ищет в пути `/movie/{id}/poster/upload` или `/movie/{id}/poster/delete`.
    pub fn parse(action: &str) -> Option<Self> {
        for (start, marker) in action.match_indices("/movie/") {
            let rest = &action[start + marker.len()..];
            let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
            if digits_len == 0 {
                continue;
            }

            let Ok(movie_id) = rest[..digits_len].parse::<MovieId>() else {
                continue;
            };
            let tail = &rest[digits_len..];
            let action = if tail.starts_with("/poster/upload") {
                PosterAction::Upload
            } else if tail.starts_with("/poster/delete") {
                PosterAction::Delete
            } else {
                continue;
            };

            return Some(PosterForm { movie_id, action });
        }
        None
    }
}

/// Подстрока, по которой ищется миниатюра афиши в таблице фильмов.
pub fn thumbnail_marker(movie_id: MovieId) -> String {
    format!("/movie/{}/poster", movie_id)
}

/// `id` картинки афиши в модальном окне фильма.
pub fn modal_image_id(movie_id: MovieId) -> String {
    format!("currentPoster{}", movie_id)
}

/// Заменяет query-строку URL на `?v={version}`.
pub fn with_cache_buster(src: &str, version: i64) -> String {
    let base = src.split('?').next().unwrap_or(src);
    format!("{}?v={}", base, version)
}

/// Источник значений `v=`: миллисекунды, строго возрастающие.
#[derive(Debug, Default)]
pub struct CacheBuster {
    last: AtomicI64,
}

impl CacheBuster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match self
                .last
                .compare_exchange(last, candidate, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }
}
