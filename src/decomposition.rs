use crate::codepoint::Codepoint;
use crate::hangul;
use crate::tables::NormalizationTables;

/// декомпозиция последовательности кодпоинтов (NFD / NFKD), результат - в каноническом порядке
pub fn decompose(tables: &NormalizationTables, input: &[u32], compatibility: bool) -> Vec<Codepoint>
{
    let mut result = Vec::with_capacity(input.len() * 2);
    let mut stack = vec![];

    for code in input {
        expand(tables, *code, compatibility, true, &mut stack, &mut |codepoint| {
            result.push(codepoint)
        });
    }

    reorder(&mut result);

    result
}

/// декомпозиция отрезка для композиции: каждый полученный кодпоинт сразу ставится на своё место
/// в каноническом порядке. слоги хангыль не раскладываем - при композиции они соберутся обратно
pub fn decompose_for_composition(
    tables: &NormalizationTables,
    input: &[u32],
    compatibility: bool,
    buffer: &mut Vec<Codepoint>,
)
{
    let mut stack = vec![];

    for code in input {
        expand(tables, *code, compatibility, false, &mut stack, &mut |codepoint| {
            place(buffer, codepoint)
        });
    }
}

/// полная декомпозиция кодпоинта
///
/// вместо рекурсии используем стек: элементы декомпозиции кладутся на него в обратном порядке,
/// поэтому разворачиваются слева направо, как при обходе в прямом порядке
#[inline(always)]
fn expand<F>(
    tables: &NormalizationTables,
    code: u32,
    compatibility: bool,
    decompose_hangul: bool,
    stack: &mut Vec<u32>,
    emit: &mut F,
) where
    F: FnMut(Codepoint),
{
    stack.push(code);

    while let Some(code) = stack.pop() {
        if hangul::is_syllable(code) {
            if !decompose_hangul {
                emit(Codepoint::from_code(code));
                continue;
            }

            let (l, v, t) = hangul::decompose_syllable(code);

            emit(Codepoint::from_code(l));
            emit(Codepoint::from_code(v));

            if let Some(t) = t {
                emit(Codepoint::from_code(t));
            }

            continue;
        }

        match tables.decomposition(code) {
            Some(decomposition) if compatibility || decomposition.is_canonical() => {
                stack.extend(decomposition.codes.iter().rev());
            }
            _ => emit(Codepoint::from_code_and_ccc(code, tables.ccc(code))),
        }
    }
}

/// канонический порядок: нестартеры сдвигаются влево, пока предшествующий кодпоинт имеет больший CCC.
/// сортировка вставками устойчива - порядок нестартеров с одинаковым CCC не меняется
pub fn reorder(buffer: &mut [Codepoint])
{
    for i in 1 .. buffer.len() {
        let codepoint = buffer[i];

        if codepoint.is_starter() {
            continue;
        }

        let mut j = i;

        while j > 0 && buffer[j - 1].ccc() > codepoint.ccc() {
            buffer[j] = buffer[j - 1];
            j -= 1;
        }

        buffer[j] = codepoint;
    }
}

/// дописать кодпоинт в буфер с учетом канонического порядка
#[inline(always)]
fn place(buffer: &mut Vec<Codepoint>, codepoint: Codepoint)
{
    let mut index = buffer.len();

    if codepoint.is_nonstarter() {
        while index > 0 && buffer[index - 1].ccc() > codepoint.ccc() {
            index -= 1;
        }
    }

    buffer.insert(index, codepoint);
}
