pub mod room;
pub mod seat;
pub mod grid;

pub use room::{Room, RoomId};
pub use seat::{Seat, SeatId, SeatType, SeatTypeUpdate};
pub use grid::{row_label, SeatGridPayload, SeatGridResponse};

/// Идентификатор фильма (для афиш).
pub type MovieId = i64;
