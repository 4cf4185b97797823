#![allow(dead_code)]

use lazy_static::lazy_static;
use unicode_normalizer::codepoint::parse_hex;
use unicode_normalizer::Normalizer;

const UNICODE_DATA: &str = include_str!("./../data/UnicodeData.txt");
const NORMALIZATION_PROPS: &str = include_str!("./../data/DerivedNormalizationProps.txt");
const NORMALIZATION_TEST: &str = include_str!("./../data/NormalizationTest.txt");

lazy_static! {
    /// нормализатор, построенный по выдержкам из UCD
    pub static ref NORMALIZER: Normalizer =
        Normalizer::from_ucd(UNICODE_DATA, NORMALIZATION_PROPS).unwrap();

    /// тесты нормализации из выдержки NormalizationTest.txt
    pub static ref NORMALIZATION_TESTS: Vec<NormalizationTest> =
        normalization_tests(NORMALIZATION_TEST);
}

/// символы, все композиции и декомпозиции которых есть в выдержках UCD
pub const ALPHABET: [u32; 27] = [
    0x0041, 0x0061, 0x00AA, 0x00C5, 0x00E2, 0x1EA1, 0x212B, 0xFF21, 0x00A0, 0x0300, 0x0301, 0x0302,
    0x0308, 0x030A, 0x0316, 0x031B, 0x0323, 0x0340, 0x0341, 0x0344, 0x1100, 0x1161, 0x11A8, 0xAC00,
    0xAC01, 0x3131, 0x314F,
];

/// тест из NormalizationTest.txt
#[derive(Debug)]
pub struct NormalizationTest
{
    pub part: String,
    pub description: String,
    pub line: usize,
    pub c1: Vec<u32>,
    pub c2: Vec<u32>,
    pub c3: Vec<u32>,
    pub c4: Vec<u32>,
    pub c5: Vec<u32>,
}

/// разбор NormalizationTest.txt
pub fn normalization_tests(source: &str) -> Vec<NormalizationTest>
{
    let mut result = vec![];
    let mut part = String::new();

    for (i, line) in source.lines().enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('@') {
            part = line.to_owned();
            continue;
        }

        let (codes, description) = line.split_once('#').unwrap_or((line, ""));
        let codes: Vec<&str> = codes.split(';').collect();

        if codes.len() != 6 {
            panic!("{}: некорректное количество полей теста", i + 1);
        }

        let codes: Vec<Vec<u32>> = codes[.. 5].iter().map(|c| parse_hex(c).unwrap()).collect();

        result.push(NormalizationTest {
            part: part.clone(),
            description: description.trim().to_owned(),
            line: i + 1,
            c1: codes[0].clone(),
            c2: codes[1].clone(),
            c3: codes[2].clone(),
            c4: codes[3].clone(),
            c5: codes[4].clone(),
        });
    }

    result
}

/// все последовательности символов алфавита длиной от 1 до max_len
pub fn sequences(max_len: usize) -> Vec<Vec<u32>>
{
    let mut result = vec![];
    let mut current: Vec<Vec<u32>> = vec![vec![]];

    for _ in 0 .. max_len {
        current = current
            .iter()
            .flat_map(|prefix| {
                ALPHABET.iter().map(move |code| {
                    let mut sequence = prefix.clone();
                    sequence.push(*code);
                    sequence
                })
            })
            .collect();

        result.extend(current.iter().cloned());
    }

    result
}

/// строка из последовательности кодпоинтов
pub fn to_string(codes: &[u32]) -> String
{
    codes.iter().map(|c| char::from_u32(*c).unwrap()).collect()
}

/// последовательность кодпоинтов строки
pub fn to_codes(source: &str) -> Vec<u32>
{
    source.chars().map(u32::from).collect()
}
