use serde::Deserialize;
use std::collections::BTreeMap;

use super::{Room, Seat};

/// Сетка мест зала: буква ряда → (номер колонки → место).
/// Сетка может быть разреженной.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeatGridResponse {
    pub room: Room,
    #[serde(default)]
    pub grid: BTreeMap<String, BTreeMap<u32, Seat>>,
}

impl SeatGridResponse {
    pub fn seat_at(&self, row: &str, column: u32) -> Option<&Seat> {
        self.grid.get(row).and_then(|cols| cols.get(&column))
    }
}

/// Ответ `GET /api/room/{id}/seats`: либо ошибка, либо сетка.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SeatGridPayload {
    Failure { error: String },
    Grid(SeatGridResponse),
}

/// Метка ряда по его номеру (с 1): A..Z, затем AA, AB, ..., ZZ, AAA.
pub fn row_label(index: u32) -> Option<String> {
    if index == 0 {
        return None;
    }

    let mut n = index;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push((b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    Some(letters.iter().rev().collect())
}
