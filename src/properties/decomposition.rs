use crate::codepoint::parse_code;
use crate::DataError;

/// декомпозиция
/// берется из UCD: 5 колонка UnicodeData.txt
///
/// декомпозиция хранится в сжатом виде - её элементы также могут иметь декомпозицию
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition
{
    /// декомпозиция
    pub codes: Vec<u32>,
    /// тег декомпозиции, для канонической декомпозиции отсутствует
    pub tag: Option<DecompositionTag>,
}

impl Decomposition
{
    /// каноническая декомпозиция
    pub fn canonical(codes: Vec<u32>) -> Self
    {
        Self { codes, tag: None }
    }

    /// декомпозиция совместимости
    pub fn compatibility(tag: DecompositionTag, codes: Vec<u32>) -> Self
    {
        Self {
            codes,
            tag: Some(tag),
        }
    }

    #[inline]
    pub fn is_canonical(&self) -> bool
    {
        self.tag.is_none()
    }
}

impl TryFrom<&str> for Decomposition
{
    type Error = DataError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        let value = value.trim();

        let (tag, codes) = match value.starts_with('<') {
            true => match value.find('>') {
                Some(end) => (
                    Some(DecompositionTag::try_from(&value[..= end])?),
                    &value[end + 1 ..],
                ),
                None => return Err(DataError::UnknownPropertyValue(value.to_owned())),
            },
            false => (None, value),
        };

        // пустой список кодов здесь допустим - это ошибка данных, и её обнаружит построение таблиц,
        // которому известен кодпоинт с такой декомпозицией
        let codes = codes
            .split_whitespace()
            .map(parse_code)
            .collect::<Result<Vec<u32>, DataError>>()?;

        Ok(Self { codes, tag })
    }
}

/// тег декомпозиции
/// берется из UCD: 5 колонка UnicodeData.txt
/// для алгоритма важен только факт его наличия - декомпозиция совместимости
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DecompositionTag
{
    /// вариант шрифта
    Font,
    /// неразрывная версия пробела или дефиса
    NoBreak,
    /// начальная форма представления (арабский)
    Initial,
    /// средняя форма представления (арабский)
    Medial,
    /// конечная форма представления (арабский)
    Final,
    /// изолированная форма представления (арабский)
    Isolated,
    /// окруженная форма
    Circle,
    /// надстрочная форма
    Super,
    /// подстрочная форма
    Sub,
    /// вертикальная форма представления
    Vertical,
    /// совместимый символ широкого формата (или зэнкаку)
    Wide,
    /// совместимый символ узкого формата (или ханкаку)
    Narrow,
    /// малая вариантная форма (совместимость CNS)
    Small,
    /// вариант шрифта в квадрате CJK
    Square,
    /// форма обыкновенной дроби
    Fraction,
    /// неопределенный символ для обеспечения совместимости
    Compat,
}

impl DecompositionTag
{
    /// запись тега в UnicodeData.txt
    pub fn abbr(&self) -> &'static str
    {
        match self {
            Self::Font => "<font>",
            Self::NoBreak => "<noBreak>",
            Self::Initial => "<initial>",
            Self::Medial => "<medial>",
            Self::Final => "<final>",
            Self::Isolated => "<isolated>",
            Self::Circle => "<circle>",
            Self::Super => "<super>",
            Self::Sub => "<sub>",
            Self::Vertical => "<vertical>",
            Self::Wide => "<wide>",
            Self::Narrow => "<narrow>",
            Self::Small => "<small>",
            Self::Square => "<square>",
            Self::Fraction => "<fraction>",
            Self::Compat => "<compat>",
        }
    }
}

impl TryFrom<&str> for DecompositionTag
{
    type Error = DataError;

    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        Ok(match abbr {
            "<font>" => Self::Font,
            "<noBreak>" => Self::NoBreak,
            "<initial>" => Self::Initial,
            "<medial>" => Self::Medial,
            "<final>" => Self::Final,
            "<isolated>" => Self::Isolated,
            "<circle>" => Self::Circle,
            "<super>" => Self::Super,
            "<sub>" => Self::Sub,
            "<vertical>" => Self::Vertical,
            "<wide>" => Self::Wide,
            "<narrow>" => Self::Narrow,
            "<small>" => Self::Small,
            "<square>" => Self::Square,
            "<fraction>" => Self::Fraction,
            "<compat>" => Self::Compat,
            _ => return Err(DataError::UnknownPropertyValue(abbr.to_owned())),
        })
    }
}

impl core::fmt::Display for DecompositionTag
{
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "{}", self.abbr())
    }
}
