/// Consumes a single byte from the input slice and returns the remaining
/// input together with the consumed byte.
///
/// Returns `None` on empty input; callers map that to the error fitting
/// their position in the header grammar.
#[inline]
pub(crate) fn consume_u8(input: &[u8]) -> Option<(&[u8], u8)> {
    let (byte, rest) = input.split_first()?;
    Some((rest, *byte))
}

/// Consumes a big-endian `u16` from the input.
///
/// Returns `None` when fewer than two bytes remain.
#[inline]
pub(crate) fn consume_u16(input: &[u8]) -> Option<(&[u8], u16)> {
    if input.len() < 2 {
        return None;
    }
    let (int_bytes, rest) = input.split_at(2);
    Some((rest, u16::from_be_bytes([int_bytes[0], int_bytes[1]])))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume() {
        assert_eq!(consume_u8(&[0x01, 0x02]), Some((&[0x02][..], 0x01)));
        assert_eq!(consume_u8(&[]), None);
        assert_eq!(consume_u16(&[0x01, 0x02, 0x03]), Some((&[0x03][..], 0x0102)));
        assert_eq!(consume_u16(&[0x01]), None);
    }
}
