use crate::codepoint::Codepoint;
use crate::hangul;
use crate::tables::NormalizationTables;

/// каноническая композиция буфера, находящегося в каноническом порядке
///
/// буфер переписывается на месте: читаем с позиции read, пишем в позицию insert (логическая длина результата),
/// скомбинированный кодпоинт заменяет последний стартер. в конце отбрасываем хвост за insert
pub fn compose(tables: &NormalizationTables, buffer: &mut Vec<Codepoint>)
{
    // кодпоинты до первого стартера комбинировать не с чем
    let first = match buffer.iter().position(|c| c.is_starter()) {
        Some(first) => first,
        None => return,
    };

    let mut starter = buffer[first].code();
    let mut starter_index = first;
    // CCC последнего записанного после стартера кодпоинта. изначально 0 - стартер ничем не заблокирован
    let mut last_ccc = 0;
    let mut insert = first + 1;

    for read in first + 1 .. buffer.len() {
        let codepoint = buffer[read];
        let code = codepoint.code();
        let ccc = codepoint.ccc();

        // чамо хангыль комбинируются только с непосредственно предшествующим кодпоинтом
        if starter_index + 1 == insert {
            if let Some(composed) = hangul::compose_jamo(starter, code) {
                starter = composed;
                buffer[starter_index] = Codepoint::from_code(composed);
                last_ccc = 0;

                continue;
            }
        }

        // кодпоинт заблокирован, если между ним и стартером есть стартер (сюда попадает и нестартер,
        // т.к. новый стартер заменил бы starter) или нестартер с таким же или большим CCC
        let blocked = match ccc {
            0 => last_ccc != 0,
            _ => last_ccc >= ccc,
        };

        if !blocked {
            if let Some(composed) = tables.compose_pair(starter, code) {
                starter = composed;
                buffer[starter_index] = Codepoint::from_code(composed);

                continue;
            }
        }

        if ccc == 0 {
            starter = code;
            starter_index = insert;
        }

        last_ccc = ccc;
        buffer[insert] = codepoint;
        insert += 1;
    }

    buffer.truncate(insert);
}
