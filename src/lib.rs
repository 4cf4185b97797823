//! нормализация Unicode (NFD, NFKD, NFC, NFKC) последовательностей кодпоинтов
//!
//! таблицы нормализации строятся один раз из данных UCD, после чего нормализатор только читает их

pub use error::DataError;
pub use properties::QuickCheck;
pub use tables::NormalizationTables;

pub mod codepoint;
pub mod hangul;
pub mod properties;
pub mod tables;
pub mod ucd;

mod composition;
mod decomposition;
mod error;
mod optimized;

#[cfg(test)]
mod fixtures;

/// форма нормализации
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationForm
{
    /// каноническая декомпозиция
    Nfd,
    /// декомпозиция совместимости
    Nfkd,
    /// каноническая декомпозиция + каноническая композиция
    Nfc,
    /// декомпозиция совместимости + каноническая композиция
    Nfkc,
}

impl NormalizationForm
{
    /// используется ли декомпозиция совместимости?
    pub fn is_compatibility(&self) -> bool
    {
        matches!(self, Self::Nfkd | Self::Nfkc)
    }

    /// выполняется ли композиция?
    pub fn is_composing(&self) -> bool
    {
        matches!(self, Self::Nfc | Self::Nfkc)
    }
}

impl TryFrom<&str> for NormalizationForm
{
    type Error = DataError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        Ok(match value.trim().to_ascii_uppercase().as_str() {
            "NFD" => Self::Nfd,
            "NFKD" => Self::Nfkd,
            "NFC" => Self::Nfc,
            "NFKC" => Self::Nfkc,
            _ => return Err(DataError::UnknownPropertyValue(value.to_owned())),
        })
    }
}

/// нормализатор, владеющий таблицами нормализации
///
/// не изменяется после создания: один экземпляр можно использовать из нескольких потоков одновременно
#[derive(Debug, Clone)]
pub struct Normalizer
{
    tables: NormalizationTables,
}

impl From<NormalizationTables> for Normalizer
{
    fn from(tables: NormalizationTables) -> Self
    {
        Self::new(tables)
    }
}

impl Normalizer
{
    pub fn new(tables: NormalizationTables) -> Self
    {
        Self { tables }
    }

    /// нормализатор по содержимому файлов UnicodeData.txt и DerivedNormalizationProps.txt
    pub fn from_ucd(unicode_data: &str, normalization_props: &str) -> Result<Self, DataError>
    {
        let records = ucd::parse_unicode_data(unicode_data)?;
        let props = ucd::parse_normalization_props(normalization_props)?;

        Ok(Self::new(NormalizationTables::new(&records, &props)?))
    }

    pub fn tables(&self) -> &NormalizationTables
    {
        &self.tables
    }

    /// полная декомпозиция с каноническим упорядочиванием (NFD, compatibility = true - NFKD)
    pub fn decompose(&self, input: &[u32], compatibility: bool) -> Vec<u32>
    {
        decomposition::decompose(&self.tables, input, compatibility)
            .iter()
            .map(|c| c.code())
            .collect()
    }

    /// декомпозиция, затем каноническая композиция (NFC, compatibility = true - NFKC)
    pub fn compose(&self, input: &[u32], compatibility: bool) -> Vec<u32>
    {
        let mut buffer = decomposition::decompose(&self.tables, input, compatibility);

        composition::compose(&self.tables, &mut buffer);

        buffer.iter().map(|c| c.code()).collect()
    }

    /// то же, что и compose, но нормализуются только отрезки, не прошедшие быструю проверку
    pub fn compose_optimized(&self, input: &[u32], compatibility: bool) -> Vec<u32>
    {
        optimized::compose_optimized(&self.tables, input, compatibility)
    }

    pub fn nfd(&self, input: &[u32]) -> Vec<u32>
    {
        self.decompose(input, false)
    }

    pub fn nfkd(&self, input: &[u32]) -> Vec<u32>
    {
        self.decompose(input, true)
    }

    pub fn nfc(&self, input: &[u32]) -> Vec<u32>
    {
        self.compose_optimized(input, false)
    }

    pub fn nfkc(&self, input: &[u32]) -> Vec<u32>
    {
        self.compose_optimized(input, true)
    }

    /// нормализация в заданную форму
    pub fn normalize(&self, form: NormalizationForm, input: &[u32]) -> Vec<u32>
    {
        match form {
            NormalizationForm::Nfd => self.nfd(input),
            NormalizationForm::Nfkd => self.nfkd(input),
            NormalizationForm::Nfc => self.nfc(input),
            NormalizationForm::Nfkc => self.nfkc(input),
        }
    }

    /// нормализация строки
    ///
    /// если таблицы содержат декомпозицию в значение, не являющееся скалярным значением Unicode,
    /// оно будет заменено на U+FFFD
    pub fn normalize_str(&self, form: NormalizationForm, input: &str) -> String
    {
        let codes: Vec<u32> = input.chars().map(u32::from).collect();

        self.normalize(form, &codes)
            .into_iter()
            .map(|code| char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }

    /// класс канонического комбинирования кодпоинта
    pub fn ccc(&self, code: u32) -> u8
    {
        self.tables.ccc(code)
    }

    /// значение быстрой проверки NFC_QC (compatibility = true - NFKC_QC)
    pub fn quick_check(&self, code: u32, compatibility: bool) -> QuickCheck
    {
        self.tables.quick_checks(code).get(compatibility)
    }
}
