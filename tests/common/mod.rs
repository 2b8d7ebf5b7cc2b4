#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;

use seat_admin::editor::SeatGridEditor;
use seat_admin::error::{EditorError, EditorResult};
use seat_admin::models::{
    MovieId, Room, RoomId, Seat, SeatGridPayload, SeatGridResponse, SeatId, SeatType, SeatTypeUpdate,
};
use seat_admin::services::admin_api::{AdminApi, PosterFile};
use seat_admin::services::notifier::AlertQueue;
use seat_admin::view::AdminPage;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FetchRoom(RoomId),
    UpdateSeat(SeatId, SeatType),
    UploadPoster(MovieId, String),
    DeletePoster(MovieId),
}

type Gate = Option<oneshot::Receiver<()>>;

/// API с заранее заданными ответами. Ответ можно придержать до `send(())`.
#[derive(Default)]
pub struct ScriptedApi {
    rooms: Mutex<HashMap<RoomId, (Gate, SeatGridPayload)>>,
    updates: Mutex<VecDeque<(Gate, SeatTypeUpdate)>>,
    /// `None` = успех, `Some(status)` = ошибка с этим статусом.
    posters: Mutex<VecDeque<Option<u16>>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn room(&self, room_id: RoomId, payload: SeatGridPayload) {
        self.rooms.lock().unwrap().insert(room_id, (None, payload));
    }

    pub fn gated_room(&self, room_id: RoomId, payload: SeatGridPayload) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.rooms.lock().unwrap().insert(room_id, (Some(rx), payload));
        tx
    }

    pub fn update_reply(&self, reply: SeatTypeUpdate) {
        self.updates.lock().unwrap().push_back((None, reply));
    }

    pub fn gated_update_reply(&self, reply: SeatTypeUpdate) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.updates.lock().unwrap().push_back((Some(rx), reply));
        tx
    }

    pub fn poster_reply(&self, status: Option<u16>) {
        self.posters.lock().unwrap().push_back(status);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Ждёт, пока редактор не сделает `n` вызовов.
    pub async fn wait_for_calls(&self, n: usize) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while self.calls.lock().unwrap().len() < n {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("editor did not issue the expected requests");
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

async fn pass(gate: Gate) {
    if let Some(rx) = gate {
        let _ = rx.await;
    }
}

#[async_trait]
impl AdminApi for ScriptedApi {
    async fn fetch_room_seats(&self, room_id: RoomId) -> EditorResult<SeatGridPayload> {
        self.record(Call::FetchRoom(room_id));
        let scripted = self.rooms.lock().unwrap().remove(&room_id);
        match scripted {
            Some((gate, payload)) => {
                pass(gate).await;
                Ok(payload)
            }
            None => Ok(SeatGridPayload::Failure { error: "Salle non trouvée".into() }),
        }
    }

    async fn update_seat_type(&self, seat_id: SeatId, seat_type: &SeatType) -> EditorResult<SeatTypeUpdate> {
        self.record(Call::UpdateSeat(seat_id, seat_type.clone()));
        let scripted = self.updates.lock().unwrap().pop_front();
        match scripted {
            Some((gate, reply)) => {
                pass(gate).await;
                Ok(reply)
            }
            None => Ok(rejected("Siège non trouvé")),
        }
    }

    async fn upload_poster(&self, movie_id: MovieId, poster: PosterFile) -> EditorResult<()> {
        self.record(Call::UploadPoster(movie_id, poster.file_name));
        self.poster_outcome()
    }

    async fn delete_poster(&self, movie_id: MovieId) -> EditorResult<()> {
        self.record(Call::DeletePoster(movie_id));
        self.poster_outcome()
    }
}

impl ScriptedApi {
    fn poster_outcome(&self) -> EditorResult<()> {
        match self.posters.lock().unwrap().pop_front().flatten() {
            None => Ok(()),
            Some(status) => Err(EditorError::PosterStatus(status)),
        }
    }
}

/// Сетка зала из списка `(ряд, колонка, id, тип)`.
pub fn grid(room_id: RoomId, nb_rows: u32, nb_columns: u32, seats: &[(&str, u32, SeatId, &str)]) -> SeatGridPayload {
    let mut grid: BTreeMap<String, BTreeMap<u32, Seat>> = BTreeMap::new();
    for (row, column, id, seat_type) in seats {
        grid.entry(row.to_string())
            .or_default()
            .insert(*column, Seat { id: *id, seat_type: SeatType::from(*seat_type) });
    }
    SeatGridPayload::Grid(SeatGridResponse {
        room: Room {
            id: room_id,
            nb_rows,
            nb_columns,
            name: format!("Salle {}", room_id),
        },
        grid,
    })
}

pub fn accepted() -> SeatTypeUpdate {
    SeatTypeUpdate {
        success: true,
        message: Some("Type de siège mis à jour".into()),
        error: None,
    }
}

pub fn rejected(message: &str) -> SeatTypeUpdate {
    SeatTypeUpdate {
        success: false,
        message: Some(message.into()),
        error: None,
    }
}

pub struct Harness {
    pub api: Arc<ScriptedApi>,
    pub alerts: Arc<AlertQueue>,
    pub editor: Arc<SeatGridEditor>,
}

pub fn harness(page: AdminPage) -> Harness {
    let api = ScriptedApi::new();
    let alerts = Arc::new(AlertQueue::new());
    let editor = Arc::new(SeatGridEditor::attach(api.clone(), alerts.clone(), page));
    Harness { api, alerts, editor }
}

pub fn seat_type(editor: &SeatGridEditor, seat_id: SeatId) -> Option<SeatType> {
    editor
        .snapshot()
        .grid
        .and_then(|grid| grid.seat(seat_id).map(|slot| slot.current_type.clone()))
}
