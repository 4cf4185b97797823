use unicode_normalizer::Normalizer;

pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

const UNICODE_DATA: &str = include_str!("./../../tests/data/UnicodeData.txt");
const NORMALIZATION_PROPS: &str = include_str!("./../../tests/data/DerivedNormalizationProps.txt");

#[macro_export]
macro_rules! group {
    ($fn: ident, $test: ident, $group: expr, $name: expr, $compatibility: expr, $method: path) => {
        #[inline(never)]
        fn $test(normalizer: &Normalizer, source: &[u32]) -> Vec<u32>
        {
            $method(normalizer, source, $compatibility)
        }

        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);
            let normalizer = group::normalizer();

            group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

            for data in group::texts() {
                let text_name = data.0;
                let text = data.1.as_slice();

                group.bench_with_input(
                    criterion::BenchmarkId::new($name, &text_name),
                    &(&normalizer, text),
                    |b, data| b.iter(|| $test(data.0, criterion::black_box(data.1))),
                );
            }

            group.finish();
        }
    };
}

/// нормализатор по выдержкам из UCD, которые используют тесты
pub fn normalizer() -> Normalizer
{
    Normalizer::from_ucd(UNICODE_DATA, NORMALIZATION_PROPS).unwrap()
}

/// тексты для замеров: строка кодпоинтов, повторенная до ~64K символов
pub fn texts() -> Vec<(&'static str, Vec<u32>)>
{
    let sources: [(&'static str, &[u32]); 4] = [
        // уже нормализованный текст
        ("normalized", &[0x41, 0x62, 0x63, 0xC5, 0x20, 0x1EAD, 0x61, 0xAC01, 0x20, 0x64]),
        // разложенные последовательности
        ("decomposed", &[0x41, 0x30A, 0x20, 0x61, 0x323, 0x302, 0x20, 0x1100, 0x1161, 0x11A8]),
        // комбинирующие знаки не в каноническом порядке
        ("unordered", &[0x61, 0x302, 0x323, 0x31B, 0x41, 0x30A, 0x316, 0x20]),
        // символы совместимости
        ("compatibility", &[0xFF21, 0x30A, 0xAA, 0x301, 0x3131, 0x314F, 0xA0, 0x41]),
    ];

    sources
        .iter()
        .map(|(name, source)| {
            let text = source.iter().copied().cycle().take(1 << 16).collect();

            (*name, text)
        })
        .collect()
}
