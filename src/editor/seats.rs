use std::sync::atomic::Ordering;
use tracing::{debug, error, info, warn};

use super::{SeatGridEditor, UPDATE_FAILED};
use crate::error::{EditorError, EditorResult};
use crate::models::{SeatId, SeatType};

/// Чем закончилась смена категории места.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatUpdate {
    /// Сервер подтвердил, ячейка перекрашена.
    Applied(SeatType),
    /// Ячейки нет в текущей сетке (пустая ячейка или чужой id). Запроса не было.
    Ignored,
    /// Ответ устарел: был более поздний клик по месту или сетка сменилась.
    Discarded,
}

impl SeatGridEditor {
    /// Клик по ячейке: следующая категория из цикла и запрос на её сохранение.
    pub async fn click_seat(&self, seat_id: SeatId) -> EditorResult<SeatUpdate> {
        self.ensure_attached()?;

        let current = self
            .page()
            .grid
            .as_ref()
            .and_then(|grid| grid.seat(seat_id))
            .map(|slot| slot.current_type.clone());

        let Some(current) = current else {
            debug!(seat_id, "Click on a cell without seat ignored");
            return Ok(SeatUpdate::Ignored);
        };

        let new_type = current.next();
        debug!(seat_id, "Cycling seat type {} -> {}", current, new_type);
        self.update_seat_type(seat_id, new_type).await
    }

    /// Сохраняет категорию места. Ячейка меняется только после подтверждения сервера.
    pub async fn update_seat_type(&self, seat_id: SeatId, new_type: SeatType) -> EditorResult<SeatUpdate> {
        self.ensure_attached()?;

        let grid_generation = self
            .page()
            .grid
            .as_ref()
            .filter(|grid| grid.seat(seat_id).is_some())
            .map(|grid| grid.generation);

        let Some(grid_generation) = grid_generation else {
            return Ok(SeatUpdate::Ignored);
        };

        let ticket = self.click_counter.fetch_add(1, Ordering::SeqCst) + 1;
        self.seat_clicks().insert(seat_id, ticket);

        let result = self
            .api
            .update_seat_type(seat_id, &new_type)
            .await
            .and_then(|update| {
                if update.success {
                    Ok(())
                } else {
                    Err(EditorError::Rejected(update.rejection_message()))
                }
            });

        if !self.take_click_ticket(seat_id, ticket) {
            debug!(seat_id, ticket, "Discarding seat type response superseded by a later click");
            return Ok(SeatUpdate::Discarded);
        }

        // Проверка поколения и правка ячейки под одной блокировкой страницы:
        // перерисовка между ними иначе получила бы чужой тип.
        let mut page = self.page();
        let Some(grid) = page
            .grid
            .as_mut()
            .filter(|grid| grid.generation == grid_generation && self.is_attached())
        else {
            debug!(seat_id, ticket, "Discarding seat type response for a replaced grid");
            return Ok(SeatUpdate::Discarded);
        };

        match result {
            Ok(()) => match grid.seat_mut(seat_id) {
                Some(slot) => {
                    slot.current_type = new_type.clone();
                    info!(seat_id, "Seat type updated to {}", new_type);
                    Ok(SeatUpdate::Applied(new_type))
                }
                None => Ok(SeatUpdate::Discarded),
            },
            Err(err) => {
                drop(page);
                match &err {
                    EditorError::Rejected(message) => {
                        warn!(seat_id, "Seat type update rejected: {}", message);
                        self.notifier.alert(&format!("Erreur: {}", message));
                    }
                    other => {
                        error!("Erreur: {:?}", other);
                        self.notifier.alert(UPDATE_FAILED);
                    }
                }
                Err(err)
            }
        }
    }

    /// Снимает токен клика. `true`, если это последний клик по месту.
    fn take_click_ticket(&self, seat_id: SeatId, ticket: u64) -> bool {
        let mut clicks = self.seat_clicks();
        if clicks.get(&seat_id) != Some(&ticket) {
            return false;
        }
        clicks.remove(&seat_id);
        true
    }
}
