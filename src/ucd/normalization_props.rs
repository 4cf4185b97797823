use std::collections::HashMap;
use std::ops::RangeInclusive;

use tracing::debug;

use crate::codepoint::parse_code;
use crate::properties::QuickCheck;
use crate::DataError;

/// свойства нормализации из DerivedNormalizationProps.txt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizationProps
{
    /// Full_Composition_Exclusion: кодпоинты, которые не могут быть получены композицией
    pub full_composition_exclusion: Vec<u32>,
    /// NFC_QC, только значения N / M
    pub nfc_qc: HashMap<u32, QuickCheck>,
    /// NFKC_QC, только значения N / M
    pub nfkc_qc: HashMap<u32, QuickCheck>,
}

/// разбор DerivedNormalizationProps.txt из UCD
///
/// прочие свойства файла (NFD_QC, NFKC_CF, Expands_On_* и т.д.) пропускаем
pub fn parse_normalization_props(source: &str) -> Result<NormalizationProps, DataError>
{
    let mut props = NormalizationProps::default();

    for (i, line) in source.lines().enumerate() {
        let data = match line.split_once('#') {
            Some((data, _)) => data,
            None => line,
        };

        if data.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = data.split(';').map(|field| field.trim()).collect();

        if fields.len() < 2 {
            return Err(DataError::MalformedLine {
                line: i + 1,
                reason: "отсутствует название свойства",
            });
        }

        let table = match fields[1] {
            "Full_Composition_Exclusion" => {
                props
                    .full_composition_exclusion
                    .extend(parse_range(fields[0])?);

                continue;
            }
            "NFC_QC" => &mut props.nfc_qc,
            "NFKC_QC" => &mut props.nfkc_qc,
            _ => continue,
        };

        let value = match fields.get(2) {
            Some(value) => QuickCheck::try_from(*value)?,
            None => {
                return Err(DataError::MalformedLine {
                    line: i + 1,
                    reason: "отсутствует значение быстрой проверки",
                })
            }
        };

        // "да" - значение по умолчанию, его не храним
        if value.is_yes() {
            continue;
        }

        for code in parse_range(fields[0])? {
            table.insert(code, value);
        }
    }

    debug!(
        exclusions = props.full_composition_exclusion.len(),
        nfc_qc = props.nfc_qc.len(),
        nfkc_qc = props.nfkc_qc.len(),
        "DerivedNormalizationProps.txt parsed"
    );

    Ok(props)
}

/// кодпоинт или диапазон кодпоинтов: "0340" / "0340..0341"
fn parse_range(source: &str) -> Result<RangeInclusive<u32>, DataError>
{
    match source.split_once("..") {
        Some((from, to)) => {
            let from = parse_code(from)?;
            let to = parse_code(to)?;

            match from <= to {
                true => Ok(from ..= to),
                false => Err(DataError::InvalidCodepoint(source.to_owned())),
            }
        }
        None => {
            let code = parse_code(source)?;

            Ok(code ..= code)
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    const DATA: &str = "\
# DerivedNormalizationProps-15.1.0.txt

# Derived Property: Full_Composition_Exclusion

0340..0341    ; Full_Composition_Exclusion # Mn   [2] COMBINING GRAVE TONE MARK..COMBINING ACUTE TONE MARK
0344          ; Full_Composition_Exclusion # Mn       COMBINING GREEK DIALYTIKA TONOS

# Property:	NFC_Quick_Check

# @missing: 0000..10FFFF; NFC_QC; Yes

0344          ; NFC_QC; N # Mn       COMBINING GREEK DIALYTIKA TONOS
0300..0302    ; NFC_QC; M # Mn   [3] COMBINING GRAVE ACCENT..COMBINING CIRCUMFLEX ACCENT

00A0          ; NFKC_QC; N # Zs       NO-BREAK SPACE
037A          ; FC_NFKC; 0020 03B9 # Lm       GREEK YPOGEGRAMMENI
00AD          ; Changes_When_NFKC_Casefolded # Cf       SOFT HYPHEN
";

    #[test]
    fn props()
    {
        let props = parse_normalization_props(DATA).unwrap();

        assert_eq!(props.full_composition_exclusion, vec![0x340, 0x341, 0x344]);

        assert_eq!(props.nfc_qc.len(), 4);
        assert_eq!(props.nfc_qc[&0x344], QuickCheck::No);
        assert_eq!(props.nfc_qc[&0x301], QuickCheck::Maybe);

        assert_eq!(props.nfkc_qc.len(), 1);
        assert_eq!(props.nfkc_qc[&0xA0], QuickCheck::No);
    }

    #[test]
    fn unknown_quick_check_value()
    {
        assert_eq!(
            parse_normalization_props("0301 ; NFC_QC; Perhaps # Mn"),
            Err(DataError::UnknownQuickCheckValue("Perhaps".to_owned()))
        );
    }

    #[test]
    fn explicit_yes_is_not_stored()
    {
        let props = parse_normalization_props("0041 ; NFC_QC; Y").unwrap();

        assert!(props.nfc_qc.is_empty());
    }

    #[test]
    fn malformed()
    {
        assert!(parse_normalization_props("0341..0340 ; Full_Composition_Exclusion").is_err());
        assert!(parse_normalization_props("0300 ; NFC_QC").is_err());
        assert!(parse_normalization_props("0300").is_err());
    }
}
