//! алгоритмические декомпозиция и композиция хангыль
//!
//! слоги хангыль не записаны в таблицы декомпозиций - слог однозначно вычисляется
//! из ведущей согласной (L), гласной (V) и необязательной завершающей согласной (T)

/// начало блока слогов хангыль
pub const HANGUL_S_BASE: u32 = 0xAC00;
/// начало блока ведущих согласных чамо
pub const HANGUL_L_BASE: u32 = 0x1100;
/// начало блока гласных чамо
pub const HANGUL_V_BASE: u32 = 0x1161;
/// начало блока завершающих согласных (на 1 меньше первой из них - T = 0 означает её отсутствие)
pub const HANGUL_T_BASE: u32 = 0x11A7;
/// количество ведущих согласных
pub const HANGUL_L_COUNT: u32 = 19;
/// количество гласных
pub const HANGUL_V_COUNT: u32 = 21;
/// количество завершающих согласных (+1 на вариант без неё)
pub const HANGUL_T_COUNT: u32 = 28;
/// количество гласных * количество завершающих согласных
pub const HANGUL_N_COUNT: u32 = HANGUL_V_COUNT * HANGUL_T_COUNT;
/// количество слогов хангыль в Unicode
pub const HANGUL_S_COUNT: u32 = HANGUL_L_COUNT * HANGUL_N_COUNT;

/// является ли кодпоинт слогом хангыль?
#[inline(always)]
pub fn is_syllable(code: u32) -> bool
{
    code.wrapping_sub(HANGUL_S_BASE) < HANGUL_S_COUNT
}

/// декомпозиция слога хангыль: L, V и завершающая согласная, если она есть
#[inline(always)]
pub fn decompose_syllable(code: u32) -> (u32, u32, Option<u32>)
{
    let s = code - HANGUL_S_BASE;

    let l = HANGUL_L_BASE + s / HANGUL_N_COUNT;
    let v = HANGUL_V_BASE + (s % HANGUL_N_COUNT) / HANGUL_T_COUNT;
    let t = HANGUL_T_BASE + s % HANGUL_T_COUNT;

    let t = match t != HANGUL_T_BASE {
        true => Some(t),
        false => None,
    };

    (l, v, t)
}

/// скомбинировать два соседних кодпоинта хангыль: L + V или LV + T
#[inline(always)]
pub fn compose_jamo(first: u32, second: u32) -> Option<u32>
{
    // кейс L, V
    let l = first.wrapping_sub(HANGUL_L_BASE);

    if l < HANGUL_L_COUNT {
        let v = second.wrapping_sub(HANGUL_V_BASE);

        return match v < HANGUL_V_COUNT {
            true => Some(HANGUL_S_BASE + (l * HANGUL_V_COUNT + v) * HANGUL_T_COUNT),
            false => None,
        };
    }

    // кейс LV, T
    let s = first.wrapping_sub(HANGUL_S_BASE);

    if s < HANGUL_S_COUNT && s % HANGUL_T_COUNT == 0 {
        let t = second.wrapping_sub(HANGUL_T_BASE);

        // T_BASE сам по себе не является завершающей согласной
        if t > 0 && t < HANGUL_T_COUNT {
            return Some(first + t);
        }
    }

    None
}
