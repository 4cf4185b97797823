use crate::DataError;

/// значение быстрой проверки NFC_QC / NFKC_QC
/// берется из UCD: DerivedNormalizationProps.txt, отсутствие записи означает "да"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum QuickCheck
{
    /// кодпоинт не меняется при нормализации
    #[default]
    Yes,
    /// кодпоинт не может присутствовать в нормализованной строке
    No,
    /// кодпоинт может скомбинироваться с предшествующим ему
    Maybe,
}

impl QuickCheck
{
    #[inline]
    pub fn is_yes(&self) -> bool
    {
        matches!(self, Self::Yes)
    }
}

impl TryFrom<&str> for QuickCheck
{
    type Error = DataError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        Ok(match value.trim() {
            "Y" => Self::Yes,
            "N" => Self::No,
            "M" => Self::Maybe,
            other => return Err(DataError::UnknownQuickCheckValue(other.to_owned())),
        })
    }
}
