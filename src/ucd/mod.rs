//! разбор файлов UCD, из которых строятся таблицы нормализации
//!
//! на вход подается содержимое файла, чтение файлов - забота вызывающей стороны

mod normalization_props;
mod unicode_data;

pub use normalization_props::parse_normalization_props;
pub use normalization_props::NormalizationProps;
pub use unicode_data::parse_unicode_data;
pub use unicode_data::UnicodeDataRecord;
