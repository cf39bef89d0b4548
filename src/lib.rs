// Базовые модули
pub mod consts;
pub mod config;
pub mod model;

// Декодер: primitive → region → snapshot → file
pub mod decode; // src/decode/{mod,error,primitive,region,snapshot,file}.rs

// Потребители дерева: table/json/csv/summary
pub mod export; // src/export/{mod,table,json,csv,summary}.rs

// Удобные реэкспорты
pub use config::DecoderConfig;
pub use decode::{
    decode_bytes, decode_file, decode_stream, split_outcome, DecodeError, Field, PartialDecode,
};
pub use model::{DamonResult, Record, Region, Snapshot};
