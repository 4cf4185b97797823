use crate::DataError;

/// последний кодпоинт Unicode
pub const LAST_CODEPOINT: u32 = 0x10FFFF;

/// кодпоинт рабочего буфера нормализации вместе с его классом комбинирования
///
/// класс комбинирования получаем из таблицы один раз, при записи кодпоинта в буфер -
/// он нужен и при сортировке, и при комбинировании
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Codepoint
{
    /// код символа
    code: u32,
    /// класс канонического комбинирования
    ccc: u8,
}

impl core::fmt::Debug for Codepoint
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "{{ code: U+{:04X}, ccc: {} }}", self.code, self.ccc)
    }
}

impl Codepoint
{
    #[inline(always)]
    pub fn code(&self) -> u32
    {
        self.code
    }

    #[inline(always)]
    pub fn ccc(&self) -> u8
    {
        self.ccc
    }

    #[inline(always)]
    pub fn is_starter(&self) -> bool
    {
        self.ccc == 0
    }

    #[inline(always)]
    pub fn is_nonstarter(&self) -> bool
    {
        self.ccc != 0
    }

    #[inline(always)]
    pub fn from_code_and_ccc(code: u32, ccc: u8) -> Self
    {
        Self { code, ccc }
    }

    #[inline(always)]
    pub fn from_code(code: u32) -> Self
    {
        Self { code, ccc: 0 }
    }
}

/// разобрать код символа, записанный в шестнадцатеричном виде ("030A")
pub fn parse_code(source: &str) -> Result<u32, DataError>
{
    let source = source.trim();

    match u32::from_str_radix(source, 16) {
        Ok(code) if code <= LAST_CODEPOINT && !source.starts_with('+') => Ok(code),
        _ => Err(DataError::InvalidCodepoint(source.to_owned())),
    }
}

/// разобрать последовательность кодов, разделённых пробелами ("0041 030A"), - так записаны тестовые векторы
pub fn parse_hex(source: &str) -> Result<Vec<u32>, DataError>
{
    source.split_whitespace().map(parse_code).collect()
}

/// поэлементное сравнение двух последовательностей кодпоинтов
pub fn equals(a: &[u32], b: &[u32]) -> bool
{
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y)
}

/// записать последовательность кодов в шестнадцатеричном виде, как в тестах UCD
pub fn to_hex(codes: &[u32]) -> String
{
    codes
        .iter()
        .map(|code| format!("{:04X}", code))
        .collect::<Vec<String>>()
        .join(" ")
}
