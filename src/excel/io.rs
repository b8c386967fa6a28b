use super::MergedRegion;

/// Convierte letras de columna (ej: "AB") a índice 1-based (A=1)
pub fn column_letters_to_index(s: &str) -> u32 {
    let mut acc = 0u32;
    for ch in s.chars() {
        if ch.is_ascii_alphabetic() {
            acc = acc * 26 + ((ch.to_ascii_uppercase() as u8 - b'A') as u32 + 1);
        }
    }
    acc
}

/// "$C$6" / "c6" -> (fila, columna). `None` si no es una celda válida.
pub fn parse_a1_cell(a1: &str) -> Option<(u32, u32)> {
    let cleaned: String = a1.trim().chars().filter(|c| *c != '$').collect();
    let split = cleaned.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = cleaned.split_at(split);
    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let row: u32 = digits.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row, column_letters_to_index(letters)))
}

/// "C6:E8" -> región. Una celda sola ("C6") es una región 1x1.
pub fn parse_a1_range(range: &str) -> Option<MergedRegion> {
    let (a, b) = match range.split_once(':') {
        Some((a, b)) => (a, b),
        None => (range, range),
    };
    let (r0, c0) = parse_a1_cell(a)?;
    let (r1, c1) = parse_a1_cell(b)?;
    Some(MergedRegion::new(r0, c0, r1, c1))
}
