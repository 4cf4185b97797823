//! таблицы, построенные по выдержкам из UCD (tests/data)

use crate::tables::NormalizationTables;
use crate::ucd::parse_normalization_props;
use crate::ucd::parse_unicode_data;

pub const UNICODE_DATA: &str = include_str!("./../tests/data/UnicodeData.txt");
pub const NORMALIZATION_PROPS: &str = include_str!("./../tests/data/DerivedNormalizationProps.txt");

pub fn tables() -> NormalizationTables
{
    let records = parse_unicode_data(UNICODE_DATA).unwrap();
    let props = parse_normalization_props(NORMALIZATION_PROPS).unwrap();

    NormalizationTables::new(&records, &props).unwrap()
}
