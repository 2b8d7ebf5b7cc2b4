use serde::{Deserialize, Serialize};
use std::fmt;

pub type SeatId = i64;

/// Категория места. Значение на проводе совпадает с CSS-классом ячейки.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SeatType {
    Normal,
    /// Места для маломобильных посетителей.
    Pmr,
    Stair,
    Empty,
    /// Значение, которого нет в цикле. Сохраняется как есть.
    Other(String),
}

impl SeatType {
    /// Фиксированный порядок цикла по клику.
    pub const CYCLE: [SeatType; 4] = [
        SeatType::Normal,
        SeatType::Pmr,
        SeatType::Stair,
        SeatType::Empty,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            SeatType::Normal => "normal",
            SeatType::Pmr => "pmr",
            SeatType::Stair => "stair",
            SeatType::Empty => "empty",
            SeatType::Other(value) => value,
        }
    }

    /// Следующая категория в цикле normal → pmr → stair → empty → normal.
    /// Неизвестное значение сбрасывается на первый элемент цикла.
    pub fn next(&self) -> SeatType {
        match Self::CYCLE.iter().position(|t| t == self) {
            Some(index) => Self::CYCLE[(index + 1) % Self::CYCLE.len()].clone(),
            None => SeatType::Normal,
        }
    }
}

impl From<String> for SeatType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "normal" => SeatType::Normal,
            "pmr" => SeatType::Pmr,
            "stair" => SeatType::Stair,
            "empty" => SeatType::Empty,
            _ => SeatType::Other(value),
        }
    }
}

impl From<&str> for SeatType {
    fn from(value: &str) -> Self {
        SeatType::from(value.to_string())
    }
}

impl From<SeatType> for String {
    fn from(value: SeatType) -> Self {
        match value {
            SeatType::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Место в ячейке сетки, как его отдаёт `/api/room/{id}/seats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: SeatId,
    #[serde(rename = "type")]
    pub seat_type: SeatType,
}

/// Тело запроса `PUT /api/seat/{id}/type`.
#[derive(Debug, Serialize)]
pub struct SeatTypeRequest<'a> {
    #[serde(rename = "type")]
    pub seat_type: &'a str,
}

/// Ответ на смену категории. При 401 сервер присылает только `error`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeatTypeUpdate {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl SeatTypeUpdate {
    /// Текст отказа сервера, если он есть.
    pub fn rejection_message(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .unwrap_or_default()
    }
}
