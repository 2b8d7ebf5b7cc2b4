use std::sync::atomic::Ordering;
use tracing::{debug, error, info, warn};

use super::{SeatGridEditor, LOAD_FAILED, TITLE_PREFIX};
use crate::error::{EditorError, EditorResult};
use crate::models::{RoomId, SeatGridPayload};
use crate::view::SeatGridView;

/// Чем закончился выбор зала.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomLoad {
    /// Выбран пустой вариант: контейнер скрыт, запроса не было.
    Hidden,
    Rendered,
    /// Пока шёл запрос, выбрали другой зал. Ответ отброшен.
    Discarded,
}

impl SeatGridEditor {
    /// Обработчик смены значения в селекторе зала.
    pub async fn on_room_change(&self, value: &str, label: &str) -> EditorResult<RoomLoad> {
        self.ensure_attached()?;

        let value = value.trim();
        if value.is_empty() {
            // Запросы, которые ещё летят, больше не должны показать сетку
            self.room_generation.fetch_add(1, Ordering::SeqCst);
            self.page().container_visible = false;
            debug!("Room selection cleared");
            return Ok(RoomLoad::Hidden);
        }

        let room_id: RoomId = match value.parse() {
            Ok(id) => id,
            Err(_) => {
                self.room_generation.fetch_add(1, Ordering::SeqCst);
                self.page().container_visible = false;
                let err = EditorError::InvalidRoomId(value.to_string());
                error!("Erreur: {}", err);
                self.notifier.alert(LOAD_FAILED);
                return Err(err);
            }
        };

        self.page().title = format!("{}{}", TITLE_PREFIX, label.trim());
        self.load_room_seats(room_id).await
    }

    /// Загружает сетку зала и показывает её.
    pub async fn load_room_seats(&self, room_id: RoomId) -> EditorResult<RoomLoad> {
        self.ensure_attached()?;

        let generation = self.room_generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(room_id, generation, "Loading room seats");

        let result = self
            .api
            .fetch_room_seats(room_id)
            .await
            .and_then(|payload| match payload {
                SeatGridPayload::Grid(data) => Ok(data),
                SeatGridPayload::Failure { error } => Err(EditorError::Server(error)),
            });

        if !self.is_current_room_load(generation) {
            debug!(room_id, generation, "Discarding stale room seats response");
            return Ok(RoomLoad::Discarded);
        }

        match result {
            Ok(data) => {
                let view = SeatGridView::render(&data, generation);
                info!(
                    "Rendered room {} ({}x{}, {} seats)",
                    room_id,
                    data.room.nb_rows,
                    data.room.nb_columns,
                    view.slots().count()
                );

                // Клики по старой сетке уже не применятся
                self.seat_clicks().clear();
                let mut page = self.page();
                page.grid = Some(view);
                page.container_visible = true;
                Ok(RoomLoad::Rendered)
            }
            Err(err) => {
                self.page().container_visible = false;
                match &err {
                    EditorError::Server(message) => {
                        warn!(room_id, "Server refused room seats: {}", message);
                        self.notifier.alert(&format!("Erreur: {}", message));
                    }
                    other => {
                        error!("Erreur: {:?}", other);
                        self.notifier.alert(LOAD_FAILED);
                    }
                }
                Err(err)
            }
        }
    }

    fn is_current_room_load(&self, generation: u64) -> bool {
        self.is_attached() && self.room_generation.load(Ordering::SeqCst) == generation
    }
}
