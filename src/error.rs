use core::fmt;
use core::num::ParseIntError;

/// ошибки разбора данных UCD и построения таблиц нормализации
///
/// сама нормализация ошибок не возвращает - все её функции определены для любой последовательности кодпоинтов
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError
{
    /// неизвестное значение свойства (тег декомпозиции, CCC)
    UnknownPropertyValue(String),
    /// не удалось разобрать код символа
    InvalidCodepoint(String),
    /// у кодпоинта указана декомпозиция, не содержащая ни одного кодпоинта
    EmptyDecomposition(u32),
    /// значение быстрой проверки отличается от Y / N / M
    UnknownQuickCheckValue(String),
    /// строка файла данных не соответствует формату
    MalformedLine { line: usize, reason: &'static str },
    /// одна и та же пара кодпоинтов комбинируется в разные символы
    DuplicateComposition(u32, u32),
}

impl From<ParseIntError> for DataError
{
    fn from(error: ParseIntError) -> Self
    {
        Self::UnknownPropertyValue(error.to_string())
    }
}

impl fmt::Display for DataError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Self::UnknownPropertyValue(value) => write!(f, "неизвестное значение свойства: {}", value),
            Self::InvalidCodepoint(value) => write!(f, "некорректный код символа: {}", value),
            Self::EmptyDecomposition(code) => write!(f, "U+{:04X}: пустая декомпозиция", code),
            Self::UnknownQuickCheckValue(value) => {
                write!(f, "неизвестное значение быстрой проверки: {}", value)
            }
            Self::MalformedLine { line, reason } => write!(f, "строка {}: {}", line, reason),
            Self::DuplicateComposition(first, second) => write!(
                f,
                "пара U+{:04X} U+{:04X} комбинируется более чем в один кодпоинт",
                first, second
            ),
        }
    }
}

impl std::error::Error for DataError {}
