use serde::{Deserialize, Deserializer};

pub type RoomId = i64;

/// Зал кинотеатра. Сервер отдаёт всю строку таблицы `room`,
/// лишние поля игнорируются.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub nb_rows: u32,
    pub nb_columns: u32,
    // Колонка `name` допускает NULL
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
