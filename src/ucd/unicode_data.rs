use tracing::debug;

use crate::codepoint::parse_code;
use crate::properties::CanonicalCombiningClass;
use crate::properties::Decomposition;
use crate::DataError;

/// запись UnicodeData.txt - только те свойства, которые участвуют в нормализации
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnicodeDataRecord
{
    /// код символа
    pub code: u32,
    /// класс канонического комбинирования
    pub ccc: CanonicalCombiningClass,
    /// декомпозиция (если есть)
    pub decomposition: Option<Decomposition>,
}

/// разбор UnicodeData.txt из UCD
///
/// диапазоны (<CJK Ideograph, First> .. <..., Last>) не разворачиваем: кодпоинты внутри них -
/// стартеры без декомпозиции, а хангыль раскладывается алгоритмически
pub fn parse_unicode_data(source: &str) -> Result<Vec<UnicodeDataRecord>, DataError>
{
    let mut records = vec![];

    for (i, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let props: Vec<&str> = line.split(';').collect();

        // нас интересуют код (0), CCC (3) и декомпозиция (5)
        if props.len() < 6 {
            return Err(DataError::MalformedLine {
                line: i + 1,
                reason: "недостаточно полей",
            });
        }

        let code = parse_code(props[0])?;
        let ccc = CanonicalCombiningClass::try_from(props[3])?;

        let decomposition = match props[5].trim().is_empty() {
            true => None,
            false => Some(Decomposition::try_from(props[5])?),
        };

        records.push(UnicodeDataRecord {
            code,
            ccc,
            decomposition,
        });
    }

    debug!(records = records.len(), "UnicodeData.txt parsed");

    Ok(records)
}
