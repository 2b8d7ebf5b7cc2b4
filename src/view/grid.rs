use crate::models::{row_label, Room, SeatGridResponse, SeatId, SeatType};

/// Ячейка с местом: на неё можно кликнуть.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatSlot {
    pub seat_id: SeatId,
    pub current_type: SeatType,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatCell {
    Seat(SeatSlot),
    /// Места нет в данных: пустая неинтерактивная ячейка.
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatRowView {
    pub label: String,
    pub cells: Vec<SeatCell>,
}

/// Отрисованная сетка зала.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatGridView {
    pub room: Room,
    /// Поколение загрузки, которая построила эту сетку.
    pub generation: u64,
    pub column_headers: Vec<u32>,
    pub rows: Vec<SeatRowView>,
}

impl SeatGridView {
    /// Строит сетку `nb_rows × nb_columns` независимо от разреженности данных.
    pub fn render(data: &SeatGridResponse, generation: u64) -> Self {
        let room = &data.room;
        let column_headers: Vec<u32> = (1..=room.nb_columns).collect();

        let rows = (1..=room.nb_rows)
            .filter_map(|row_index| {
                let label = row_label(row_index)?;
                let cells = column_headers
                    .iter()
                    .map(|&column| match data.seat_at(&label, column) {
                        Some(seat) => SeatCell::Seat(SeatSlot {
                            seat_id: seat.id,
                            current_type: seat.seat_type.clone(),
                            column,
                        }),
                        None => SeatCell::Placeholder,
                    })
                    .collect();
                Some(SeatRowView { label, cells })
            })
            .collect();

        Self {
            room: room.clone(),
            generation,
            column_headers,
            rows,
        }
    }

    /// Количество ячеек в строке заголовков (включая спейсер).
    pub fn header_cell_count(&self) -> usize {
        self.column_headers.len() + 1
    }

    pub fn seat(&self, seat_id: SeatId) -> Option<&SeatSlot> {
        self.slots().find(|slot| slot.seat_id == seat_id)
    }

    pub fn seat_mut(&mut self, seat_id: SeatId) -> Option<&mut SeatSlot> {
        self.rows
            .iter_mut()
            .flat_map(|row| row.cells.iter_mut())
            .find_map(|cell| match cell {
                SeatCell::Seat(slot) if slot.seat_id == seat_id => Some(slot),
                _ => None,
            })
    }

    pub fn slots(&self) -> impl Iterator<Item = &SeatSlot> {
        self.rows.iter().flat_map(|row| row.cells.iter()).filter_map(|cell| match cell {
            SeatCell::Seat(slot) => Some(slot),
            SeatCell::Placeholder => None,
        })
    }
}
