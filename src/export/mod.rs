//! Экспорт декодированного дерева (только чтение DamonResult).
//!
//! - table.rs   : человекочитаемая таблица в формате damon converter.
//! - json.rs    : JSON (serde_json), поля как в модели.
//! - csv.rs     : одна строка на регион + пустая строка после снапшота.
//! - summary.rs : агрегаты по файлу (текст или JSON).

pub mod csv;
pub mod json;
pub mod summary;
pub mod table;

pub use csv::write_csv;
pub use json::write_json;
pub use summary::Summary;
pub use table::write_table;
