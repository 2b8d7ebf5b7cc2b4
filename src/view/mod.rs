pub mod grid;
pub mod html;
pub mod page;

pub use grid::{SeatCell, SeatGridView, SeatRowView, SeatSlot};
pub use page::{AdminPage, PosterImage};
