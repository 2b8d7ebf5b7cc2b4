pub mod config;
pub mod controllers;
pub mod editor;
pub mod error;
pub mod models;
pub mod services;
pub mod view;

use std::sync::Arc;

use editor::SeatGridEditor;
use services::admin_api::{AdminApi, HttpAdminApi};
use services::notifier::AlertQueue;
use view::AdminPage;

// Shared state хоста: один редактор на страницу
#[derive(Clone)]
pub struct AppState {
    pub editor: Arc<SeatGridEditor>,
    pub alerts: Arc<AlertQueue>,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> error::EditorResult<Arc<Self>> {
        let api = HttpAdminApi::from_config(&config.api)?;
        let page = AdminPage::with_posters(api.base_url(), &config.page.poster_movie_ids);
        Ok(Self::with_api(config, Arc::new(api), page))
    }

    /// Состояние с произвольной реализацией API.
    pub fn with_api(config: config::Config, api: Arc<dyn AdminApi>, page: AdminPage) -> Arc<Self> {
        let alerts = Arc::new(AlertQueue::new());
        let editor = Arc::new(SeatGridEditor::attach(api, alerts.clone(), page));

        Arc::new(Self { editor, alerts, config })
    }
}
