//! editor
//!
//! `SeatGridEditor`: редактор схемы зала на странице администрирования.
//!
//! Компонент создаётся один раз на страницу (`attach`) и владеет её элементами:
//! контейнером сетки, заголовком, самой сеткой и картинками афиш.
//! `detach` снимает его со страницы; после этого все операции возвращают
//! `EditorError::Detached`, а ответы запросов, которые ещё летят, отбрасываются.
//!
//! Гонки между запросами решаются токенами:
//! - каждая загрузка зала получает номер поколения, применяется только ответ
//!   последней загрузки;
//! - каждый клик по месту получает номер, применяется только ответ последнего
//!   клика по этому месту и только пока на экране та же сетка.

mod posters;
mod room;
mod seats;

pub use posters::PosterRefresh;
pub use room::RoomLoad;
pub use seats::SeatUpdate;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

use crate::error::{EditorError, EditorResult};
use crate::models::SeatId;
use crate::services::admin_api::AdminApi;
use crate::services::notifier::Notifier;
use crate::services::posters::CacheBuster;
use crate::view::AdminPage;

pub(crate) const TITLE_PREFIX: &str = "Configuration des sièges - ";
pub(crate) const LOAD_FAILED: &str = "Erreur lors du chargement des sièges";
pub(crate) const UPDATE_FAILED: &str = "Erreur lors de la mise à jour";
pub(crate) const POSTER_FAILED: &str = "Erreur lors de la mise à jour de l'affiche";
pub(crate) const POSTER_MISSING: &str = "Aucun fichier sélectionné";

pub struct SeatGridEditor {
    api: Arc<dyn AdminApi>,
    notifier: Arc<dyn Notifier>,
    page: Mutex<AdminPage>,
    /// Номер последней начатой загрузки зала.
    room_generation: AtomicU64,
    /// Номер последнего клика по каждому месту.
    seat_clicks: Mutex<HashMap<SeatId, u64>>,
    click_counter: AtomicU64,
    cache_buster: CacheBuster,
    attached: AtomicBool,
}

impl SeatGridEditor {
    /// Привязывает редактор к странице. Контейнер сетки скрыт до выбора зала.
    pub fn attach(api: Arc<dyn AdminApi>, notifier: Arc<dyn Notifier>, mut page: AdminPage) -> Self {
        page.container_visible = false;
        info!("Seat grid editor attached ({} poster images)", page.images.len());

        Self {
            api,
            notifier,
            page: Mutex::new(page),
            room_generation: AtomicU64::new(0),
            seat_clicks: Mutex::new(HashMap::new()),
            click_counter: AtomicU64::new(0),
            cache_buster: CacheBuster::new(),
            attached: AtomicBool::new(true),
        }
    }

    /// Снимает редактор со страницы. Повторный вызов ничего не делает.
    pub fn detach(&self) {
        if !self.attached.swap(false, Ordering::SeqCst) {
            return;
        }

        self.room_generation.fetch_add(1, Ordering::SeqCst);
        self.seat_clicks().clear();

        let mut page = self.page();
        page.grid = None;
        page.container_visible = false;
        info!("Seat grid editor detached");
    }

    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::SeqCst)
    }

    /// Копия текущего состояния страницы.
    pub fn snapshot(&self) -> AdminPage {
        self.page().clone()
    }

    fn ensure_attached(&self) -> EditorResult<()> {
        if self.is_attached() {
            Ok(())
        } else {
            Err(EditorError::Detached)
        }
    }

    // Блокировки никогда не держатся через `.await`
    fn page(&self) -> MutexGuard<'_, AdminPage> {
        self.page.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn seat_clicks(&self) -> MutexGuard<'_, HashMap<SeatId, u64>> {
        self.seat_clicks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
