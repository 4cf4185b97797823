use crate::DataError;

/// класс канонического комбинирования (Canonical Combining Class, CCC)
/// берется из UCD: третья колонка UnicodeData.txt, отсутствие записи означает 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalCombiningClass(u8);

#[allow(non_upper_case_globals)]
impl CanonicalCombiningClass
{
    pub const NotReordered: Self = Self(0);
    pub const Overlay: Self = Self(1);
    pub const Nukta: Self = Self(7);
    pub const Virama: Self = Self(9);
    pub const AttachedAbove: Self = Self(214);
    pub const AttachedAboveRight: Self = Self(216);
    pub const Below: Self = Self(220);
    pub const Above: Self = Self(230);
    pub const IotaSubscript: Self = Self(240);
}

impl CanonicalCombiningClass
{
    #[inline]
    pub fn is_starter(&self) -> bool
    {
        self.0 == 0
    }

    #[inline]
    pub fn is_non_starter(&self) -> bool
    {
        self.0 != 0
    }

    #[inline]
    pub fn u8(&self) -> u8
    {
        self.0
    }
}

impl From<u8> for CanonicalCombiningClass
{
    #[inline]
    fn from(value: u8) -> Self
    {
        Self(value)
    }
}

impl From<CanonicalCombiningClass> for u8
{
    #[inline]
    fn from(value: CanonicalCombiningClass) -> Self
    {
        value.0
    }
}

impl TryFrom<&str> for CanonicalCombiningClass
{
    type Error = DataError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        Ok(Self::from(value.trim().parse::<u8>()?))
    }
}
