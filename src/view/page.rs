use super::grid::SeatGridView;
use crate::models::MovieId;
use crate::services::posters::{modal_image_id, thumbnail_marker};

/// Картинка афиши на странице.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterImage {
    pub element_id: Option<String>,
    pub src: String,
}

/// Элементы страницы, которыми владеет редактор.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminPage {
    pub container_visible: bool,
    pub title: String,
    pub grid: Option<SeatGridView>,
    pub images: Vec<PosterImage>,
}

impl AdminPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Страница с миниатюрой и модальной картинкой для каждого фильма.
    pub fn with_posters(base_url: &str, movie_ids: &[MovieId]) -> Self {
        let mut page = Self::new();
        for &movie_id in movie_ids {
            let src = format!("{}{}", base_url, thumbnail_marker(movie_id));
            page.images.push(PosterImage { element_id: None, src: src.clone() });
            page.images.push(PosterImage {
                element_id: Some(modal_image_id(movie_id)),
                src,
            });
        }
        page
    }

    /// Первая картинка, чей `src` содержит подстроку.
    pub fn image_with_src_containing(&mut self, needle: &str) -> Option<&mut PosterImage> {
        self.images.iter_mut().find(|img| img.src.contains(needle))
    }

    pub fn image_by_id(&mut self, element_id: &str) -> Option<&mut PosterImage> {
        self.images
            .iter_mut()
            .find(|img| img.element_id.as_deref() == Some(element_id))
    }
}
