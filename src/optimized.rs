use tracing::trace;

use crate::codepoint::Codepoint;
use crate::composition::compose;
use crate::decomposition::decompose_for_composition;
use crate::tables::NormalizationTables;

/// композиция (NFC / NFKC) с предварительной быстрой проверкой
///
/// нормализуем только отрезки, в которых быстрая проверка не прошла. отрезок начинается с последнего стартера
/// перед "подозрительным" кодпоинтом и заканчивается перед стартером, про который известно, что он ни с чем
/// предшествующим не скомбинируется. всё остальное копируется без изменений
pub fn compose_optimized(tables: &NormalizationTables, input: &[u32], compatibility: bool) -> Vec<u32>
{
    let mut start = find_compose_start(tables, input, 0, compatibility);

    // строка уже нормализована
    if start == input.len() {
        return input.to_vec();
    }

    let mut result = Vec::with_capacity(input.len() + input.len() / 2);
    let mut buffer: Vec<Codepoint> = Vec::with_capacity(32);

    result.extend_from_slice(&input[.. start]);

    loop {
        let end = find_span_end(tables, input, start + 1, compatibility);

        buffer.clear();
        decompose_for_composition(tables, &input[start .. end], compatibility, &mut buffer);
        compose(tables, &mut buffer);

        result.extend(buffer.iter().map(|c| c.code()));

        trace!(start, end, "span recomposed");

        if end == input.len() {
            break;
        }

        // участок за отрезком, прошедший быструю проверку
        let next = find_compose_start(tables, input, end, compatibility);

        result.extend_from_slice(&input[end .. next]);

        if next == input.len() {
            break;
        }

        start = next;
    }

    result
}

/// начало отрезка, требующего нормализации, - индекс последнего стартера перед первым кодпоинтом,
/// не прошедшим быструю проверку, или нарушением канонического порядка. если таких нет - длина входных данных
pub fn find_compose_start(
    tables: &NormalizationTables,
    input: &[u32],
    from: usize,
    compatibility: bool,
) -> usize
{
    let mut last_starter = from;
    let mut last_ccc = 0;

    for (i, &code) in input.iter().enumerate().skip(from) {
        if !passes_quick_check(tables, code, compatibility) {
            return last_starter;
        }

        let ccc = tables.ccc(code);

        if ccc == 0 {
            last_starter = i;
            last_ccc = 0;

            continue;
        }

        if last_ccc > ccc {
            return last_starter;
        }

        last_ccc = ccc;
    }

    input.len()
}

/// конец отрезка: первый стартер начиная с позиции from, прошедший быструю проверку
pub fn find_span_end(tables: &NormalizationTables, input: &[u32], from: usize, compatibility: bool)
    -> usize
{
    input
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, &code)| tables.ccc(code) == 0 && passes_quick_check(tables, code, compatibility))
        .map(|(i, _)| i)
        .unwrap_or(input.len())
}

/// для NFKC кодпоинт должен пройти обе быстрые проверки
#[inline(always)]
fn passes_quick_check(tables: &NormalizationTables, code: u32, compatibility: bool) -> bool
{
    let checks = tables.quick_checks(code);

    match compatibility {
        true => checks.nfc.is_yes() && checks.nfkc.is_yes(),
        false => checks.nfc.is_yes(),
    }
}
