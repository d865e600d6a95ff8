use super::{
    EOF_FORMAT, EOF_MAGIC, HEADER_BASE, KIND_CODE, KIND_DATA, KIND_TABLE, KIND_TERMINATOR,
    SECTION_HEADER_SIZE, TERMINATOR_SIZE,
};
use std::vec::Vec;

/// Decoded header of a version 1 container.
///
/// Holds declared sizes only; byte offsets into the container are derived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Eof1Header {
    /// Size of the code section. Never zero in a valid container.
    pub code_size: u16,
    /// Size of the data section, zero when the section is absent.
    pub data_size: u16,
}

impl Eof1Header {
    /// Byte size of the prefix, version and section headers, terminator
    /// included.
    pub const fn header_size(&self) -> usize {
        HEADER_BASE
            + SECTION_HEADER_SIZE
            + if self.data_size != 0 { SECTION_HEADER_SIZE } else { 0 }
            + TERMINATOR_SIZE
    }

    /// Offset of the first code byte.
    pub const fn code_begin(&self) -> usize {
        self.header_size()
    }

    /// Offset one past the last code byte.
    pub const fn code_end(&self) -> usize {
        self.code_begin() + self.code_size as usize
    }

    /// Total declared size of the section bodies.
    pub const fn body_size(&self) -> usize {
        self.code_size as usize + self.data_size as usize
    }

    /// Size of the whole container in bytes.
    pub const fn eof_size(&self) -> usize {
        self.header_size() + self.body_size()
    }

    /// Encodes the prefix, version and section headers into `buffer`.
    ///
    /// An absent data section is encoded by omitting its header triple,
    /// never by a zero size.
    pub fn encode(&self, buffer: &mut Vec<u8>) {
        buffer.push(EOF_FORMAT);
        buffer.extend_from_slice(&EOF_MAGIC);
        buffer.push(1);
        buffer.push(KIND_CODE);
        buffer.extend_from_slice(&self.code_size.to_be_bytes());
        if self.data_size != 0 {
            buffer.push(KIND_DATA);
            buffer.extend_from_slice(&self.data_size.to_be_bytes());
        }
        buffer.push(KIND_TERMINATOR);
    }
}

/// Decoded header of a version 2 container.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Eof2Header {
    /// Size of the code section. Never zero in a valid container.
    pub code_size: u16,
    /// Size of the data section, zero when the section is absent.
    pub data_size: u16,
    /// Declared table section sizes, in declaration order.
    ///
    /// Tables are indexed positionally, so the order is load-bearing.
    pub table_sizes: Vec<u16>,
}

impl Eof2Header {
    /// Byte size of the prefix, version and section headers, terminator
    /// included.
    pub fn header_size(&self) -> usize {
        HEADER_BASE
            + SECTION_HEADER_SIZE
            + if self.data_size != 0 { SECTION_HEADER_SIZE } else { 0 }
            + SECTION_HEADER_SIZE * self.table_sizes.len()
            + TERMINATOR_SIZE
    }

    /// Offset of the first code byte.
    pub fn code_begin(&self) -> usize {
        self.header_size()
    }

    /// Offset one past the last code byte.
    pub fn code_end(&self) -> usize {
        self.code_begin() + self.code_size as usize
    }

    /// Offset of the first table byte. Tables follow the data section.
    pub fn tables_begin(&self) -> usize {
        self.code_end() + self.data_size as usize
    }

    /// Total declared size of the section bodies.
    pub fn body_size(&self) -> usize {
        self.code_size as usize
            + self.data_size as usize
            + self.table_sizes.iter().map(|size| *size as usize).sum::<usize>()
    }

    /// Size of the whole container in bytes.
    pub fn eof_size(&self) -> usize {
        self.header_size() + self.body_size()
    }

    /// Encodes the prefix, version and section headers into `buffer`.
    pub fn encode(&self, buffer: &mut Vec<u8>) {
        buffer.push(EOF_FORMAT);
        buffer.extend_from_slice(&EOF_MAGIC);
        buffer.push(2);
        buffer.push(KIND_CODE);
        buffer.extend_from_slice(&self.code_size.to_be_bytes());
        if self.data_size != 0 {
            buffer.push(KIND_DATA);
            buffer.extend_from_slice(&self.data_size.to_be_bytes());
        }
        for size in &self.table_sizes {
            buffer.push(KIND_TABLE);
            buffer.extend_from_slice(&size.to_be_bytes());
        }
        buffer.push(KIND_TERMINATOR);
    }
}

/// Decodes the header of an already validated version 1 container.
///
/// The interpreter re-enters validated containers on every call, so this
/// path skips straight to the size fields without shape checks.
///
/// # Panics
///
/// May panic, or return garbage, when `code` has not passed
/// [`validate_eof1`](super::validate_eof1).
pub fn read_valid_eof1_header(code: &[u8]) -> Eof1Header {
    let size_offset = HEADER_BASE + 1;
    let code_size = u16::from_be_bytes([code[size_offset], code[size_offset + 1]]);
    let next_section = size_offset + 2;
    let data_size = if code[next_section] == KIND_DATA {
        u16::from_be_bytes([code[next_section + 1], code[next_section + 2]])
    } else {
        0
    };
    Eof1Header {
        code_size,
        data_size,
    }
}

/// Decodes the header of an already validated version 2 container.
///
/// # Panics
///
/// May panic, or return garbage, when `code` has not passed
/// [`validate_eof2`](super::validate_eof2).
pub fn read_valid_eof2_header(code: &[u8]) -> Eof2Header {
    let size_offset = HEADER_BASE + 1;
    let code_size = u16::from_be_bytes([code[size_offset], code[size_offset + 1]]);
    let mut next_section = size_offset + 2;
    let data_size = if code[next_section] == KIND_DATA {
        let size = u16::from_be_bytes([code[next_section + 1], code[next_section + 2]]);
        next_section += SECTION_HEADER_SIZE;
        size
    } else {
        0
    };
    let mut table_sizes = Vec::new();
    while code[next_section] != KIND_TERMINATOR {
        debug_assert_eq!(code[next_section], KIND_TABLE);
        table_sizes.push(u16::from_be_bytes([
            code[next_section + 1],
            code[next_section + 2],
        ]));
        next_section += SECTION_HEADER_SIZE;
    }
    Eof2Header {
        code_size,
        data_size,
        table_sizes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives::hex;
    use std::vec;

    #[test]
    fn eof1_offsets() {
        let header = Eof1Header {
            code_size: 1,
            data_size: 0,
        };
        assert_eq!(header.code_begin(), 8);
        assert_eq!(header.code_end(), 9);
        assert_eq!(header.eof_size(), 9);

        let header = Eof1Header {
            code_size: 2,
            data_size: 2,
        };
        assert_eq!(header.code_begin(), 11);
        assert_eq!(header.code_end(), 13);
        assert_eq!(header.eof_size(), 15);
    }

    #[test]
    fn eof2_offsets() {
        let header = Eof2Header {
            code_size: 1,
            data_size: 0,
            table_sizes: vec![2],
        };
        assert_eq!(header.code_begin(), 11);
        assert_eq!(header.code_end(), 12);
        assert_eq!(header.tables_begin(), 12);
        assert_eq!(header.eof_size(), 14);

        let header = Eof2Header {
            code_size: 3,
            data_size: 4,
            table_sizes: vec![2, 6],
        };
        // 4 prefix + 3 code + 3 data + 2 * 3 tables + 1 terminator.
        assert_eq!(header.code_begin(), 17);
        assert_eq!(header.code_end(), 20);
        assert_eq!(header.tables_begin(), 24);
        assert_eq!(header.eof_size(), 32);
    }

    #[test]
    fn read_eof1_header() {
        let code = hex!("efcafe0101000100aa");
        let header = read_valid_eof1_header(&code);
        assert_eq!(header.code_size, 1);
        assert_eq!(header.data_size, 0);

        let code = hex!("efcafe0101000202000200bbccddee");
        let header = read_valid_eof1_header(&code);
        assert_eq!(header.code_size, 2);
        assert_eq!(header.data_size, 2);
    }

    #[test]
    fn read_eof2_header() {
        let code = hex!("efcafe0201000103000200aabbcc");
        let header = read_valid_eof2_header(&code);
        assert_eq!(header.code_size, 1);
        assert_eq!(header.data_size, 0);
        assert_eq!(header.table_sizes, vec![2]);

        let code = hex!("efcafe0201000102000203000203000400aabbccd1d2e1e2e3e4");
        let header = read_valid_eof2_header(&code);
        assert_eq!(header.code_size, 1);
        assert_eq!(header.data_size, 2);
        assert_eq!(header.table_sizes, vec![2, 4]);
    }

    #[test]
    fn encode_matches_wire_form() {
        let header = Eof1Header {
            code_size: 1,
            data_size: 0,
        };
        let mut buffer = Vec::new();
        header.encode(&mut buffer);
        assert_eq!(buffer, hex!("efcafe0101000100"));
        assert_eq!(buffer.len(), header.header_size());

        let header = Eof2Header {
            code_size: 1,
            data_size: 2,
            table_sizes: vec![2, 4],
        };
        let mut buffer = Vec::new();
        header.encode(&mut buffer);
        assert_eq!(buffer, hex!("efcafe0201000102000203000203000400"));
        assert_eq!(buffer.len(), header.header_size());
    }
}
