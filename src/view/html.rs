use askama::Template;

use super::grid::{SeatCell, SeatGridView};
use super::page::AdminPage;
use crate::models::MovieId;
use crate::services::posters::{modal_image_id, thumbnail_marker};

/// Сетка мест. Место отрисовывается кнопкой, которая отправляет клик
/// на `/seats/{id}/click`; пустая ячейка не имеет ни данных, ни действия.
#[derive(Template)]
#[template(path = "grid.html")]
struct GridTemplate<'a> {
    view: &'a SeatGridView,
}

#[derive(Template)]
#[template(path = "admin.html")]
struct AdminTemplate<'a> {
    alerts: &'a [String],
    // Значение CSS `display` контейнера сетки
    display: &'static str,
    title: &'a str,
    // Уже отрисованная сетка
    grid_html: String,
    posters: Vec<PosterSection<'a>>,
}

struct PosterSection<'a> {
    movie_id: MovieId,
    thumbnail_src: Option<&'a str>,
    modal_src: Option<&'a str>,
}

pub fn render_grid(view: &SeatGridView) -> askama::Result<String> {
    GridTemplate { view }.render()
}

/// Полная страница редактора для хоста.
pub fn render_page(page: &AdminPage, alerts: &[String], movie_ids: &[MovieId]) -> askama::Result<String> {
    let grid_html = match &page.grid {
        Some(view) => render_grid(view)?,
        None => String::new(),
    };

    let posters = movie_ids
        .iter()
        .map(|&movie_id| {
            let marker = thumbnail_marker(movie_id);
            let modal_id = modal_image_id(movie_id);
            PosterSection {
                movie_id,
                thumbnail_src: page
                    .images
                    .iter()
                    .find(|img| img.element_id.is_none() && img.src.contains(&marker))
                    .map(|img| img.src.as_str()),
                modal_src: page
                    .images
                    .iter()
                    .find(|img| img.element_id.as_deref() == Some(modal_id.as_str()))
                    .map(|img| img.src.as_str()),
            }
        })
        .collect();

    AdminTemplate {
        alerts,
        display: if page.container_visible { "block" } else { "none" },
        title: &page.title,
        grid_html,
        posters,
    }
    .render()
}
