use tracing::{error, info, warn};

use super::{SeatGridEditor, POSTER_FAILED, POSTER_MISSING};
use crate::error::{EditorError, EditorResult};
use crate::models::MovieId;
use crate::services::admin_api::PosterFile;
use crate::services::posters::{modal_image_id, thumbnail_marker, with_cache_buster, PosterAction, PosterForm};

/// Результат обновления картинок афиши.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosterRefresh {
    pub movie_id: MovieId,
    /// Значение `v=` в новых URL.
    pub version: i64,
    /// Сколько картинок на странице обновлено (0..=2).
    pub refreshed: usize,
}

impl SeatGridEditor {
    /// Отправляет форму загрузки или удаления афиши и после подтверждения
    /// сервера обновляет миниатюру и картинку в модальном окне.
    pub async fn submit_poster_form(&self, action: &str, poster: Option<PosterFile>) -> EditorResult<PosterRefresh> {
        self.ensure_attached()?;

        let form = PosterForm::parse(action).ok_or_else(|| EditorError::UnknownFormAction(action.to_string()))?;

        let result = match (form.action, poster) {
            (PosterAction::Upload, Some(poster)) => {
                info!(movie_id = form.movie_id, "Uploading poster {} ({} bytes)", poster.file_name, poster.bytes.len());
                self.api.upload_poster(form.movie_id, poster).await
            }
            (PosterAction::Upload, None) => {
                warn!(movie_id = form.movie_id, "Poster upload submitted without a file");
                self.notifier.alert(POSTER_MISSING);
                return Err(EditorError::MissingPosterFile);
            }
            (PosterAction::Delete, _) => {
                info!(movie_id = form.movie_id, "Deleting poster");
                self.api.delete_poster(form.movie_id).await
            }
        };

        if let Err(err) = result {
            error!("Erreur: {:?}", err);
            self.notifier.alert(POSTER_FAILED);
            return Err(err);
        }

        self.ensure_attached()?;
        Ok(self.refresh_poster_images(form.movie_id))
    }

    fn refresh_poster_images(&self, movie_id: MovieId) -> PosterRefresh {
        let version = self.cache_buster.next();
        let mut page = self.page();
        let mut refreshed = 0;

        if let Some(img) = page.image_with_src_containing(&thumbnail_marker(movie_id)) {
            img.src = with_cache_buster(&img.src, version);
            refreshed += 1;
        }
        if let Some(img) = page.image_by_id(&modal_image_id(movie_id)) {
            img.src = with_cache_buster(&img.src, version);
            refreshed += 1;
        }

        info!(movie_id, version, refreshed, "Poster images refreshed");
        PosterRefresh { movie_id, version, refreshed }
    }
}
