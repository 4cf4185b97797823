use std::collections::HashMap;
use std::collections::HashSet;

use tracing::debug;

use crate::properties::Decomposition;
use crate::properties::QuickCheck;
use crate::ucd::NormalizationProps;
use crate::ucd::UnicodeDataRecord;
use crate::DataError;

/// значения быстрых проверок кодпоинта
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuickChecks
{
    /// NFC_QC
    pub nfc: QuickCheck,
    /// NFKC_QC
    pub nfkc: QuickCheck,
}

impl QuickChecks
{
    /// значение быстрой проверки для NFC (compatibility = false) или NFKC
    #[inline]
    pub fn get(&self, compatibility: bool) -> QuickCheck
    {
        match compatibility {
            true => self.nfkc,
            false => self.nfc,
        }
    }
}

/// таблицы нормализации
///
/// строятся один раз из записей UCD и далее только читаются - их можно разделять между потоками без синхронизации
#[derive(Debug, Clone, Default)]
pub struct NormalizationTables
{
    /// классы канонического комбинирования, только ненулевые
    ccc: HashMap<u32, u8>,
    /// декомпозиции в том виде, в каком они записаны в UnicodeData.txt (неразвернутые)
    decompositions: HashMap<u32, Decomposition>,
    /// пары (стартер, кодпоинт) для канонической композиции
    compositions: HashMap<(u32, u32), u32>,
    /// быстрые проверки, только для кодпоинтов, у которых хотя бы одно из значений - не "да"
    quick_checks: HashMap<u32, QuickChecks>,
}

impl NormalizationTables
{
    /// построить таблицы из записей UnicodeData.txt и свойств DerivedNormalizationProps.txt
    pub fn new(records: &[UnicodeDataRecord], props: &NormalizationProps)
        -> Result<Self, DataError>
    {
        let exclusions: HashSet<u32> = props.full_composition_exclusion.iter().copied().collect();
        let mut tables = Self::default();

        for record in records {
            if record.ccc.is_non_starter() {
                tables.ccc.insert(record.code, record.ccc.u8());
            }

            let decomposition = match &record.decomposition {
                Some(decomposition) => decomposition,
                None => continue,
            };

            if decomposition.codes.is_empty() {
                return Err(DataError::EmptyDecomposition(record.code));
            }

            // комбинируются только кодпоинты с канонической декомпозицией на 2 кодпоинта,
            // не являющиеся исключениями композиции
            if decomposition.is_canonical()
                && decomposition.codes.len() == 2
                && !exclusions.contains(&record.code)
            {
                let pair = (decomposition.codes[0], decomposition.codes[1]);

                if tables.compositions.insert(pair, record.code).is_some() {
                    return Err(DataError::DuplicateComposition(pair.0, pair.1));
                }
            }

            tables
                .decompositions
                .insert(record.code, decomposition.clone());
        }

        for (code, value) in props.nfc_qc.iter() {
            tables.quick_checks.entry(*code).or_default().nfc = *value;
        }

        for (code, value) in props.nfkc_qc.iter() {
            tables.quick_checks.entry(*code).or_default().nfkc = *value;
        }

        debug!(
            ccc = tables.ccc.len(),
            decompositions = tables.decompositions.len(),
            compositions = tables.compositions.len(),
            quick_checks = tables.quick_checks.len(),
            "normalization tables built"
        );

        Ok(tables)
    }

    /// класс канонического комбинирования
    #[inline(always)]
    pub fn ccc(&self, code: u32) -> u8
    {
        self.ccc.get(&code).copied().unwrap_or(0)
    }

    /// декомпозиция (один уровень)
    #[inline(always)]
    pub fn decomposition(&self, code: u32) -> Option<&Decomposition>
    {
        self.decompositions.get(&code)
    }

    /// скомбинировать пару кодпоинтов по таблице композиций (без учета хангыль)
    #[inline(always)]
    pub fn compose_pair(&self, first: u32, second: u32) -> Option<u32>
    {
        self.compositions.get(&(first, second)).copied()
    }

    /// быстрые проверки кодпоинта
    #[inline(always)]
    pub fn quick_checks(&self, code: u32) -> QuickChecks
    {
        self.quick_checks.get(&code).copied().unwrap_or_default()
    }

    /// количество пар в таблице композиций
    pub fn compositions_count(&self) -> usize
    {
        self.compositions.len()
    }
}
