use super::{
    decode_helpers::{consume_u16, consume_u8},
    eof_version, is_eof,
    header::{Eof1Header, Eof2Header},
    EofValidationError, HEADER_BASE, KIND_CODE, KIND_DATA, KIND_TABLE, KIND_TERMINATOR,
};
use primitives::SpecId;
use std::vec::Vec;

/// Section sizes collected from a container header.
///
/// `data_size` of zero means the data section header was omitted; a
/// declared zero size never gets this far. Table sizes keep declaration
/// order, tables are indexed positionally later.
#[derive(Debug, Default, PartialEq, Eq)]
struct SectionHeaders {
    code_size: u16,
    data_size: u16,
    table_sizes: Vec<u16>,
}

impl SectionHeaders {
    /// Total declared size of all section bodies.
    fn body_size(&self) -> usize {
        self.code_size as usize
            + self.data_size as usize
            + self.table_sizes.iter().map(|size| *size as usize).sum::<usize>()
    }
}

/// Reads one declared section size.
///
/// Sizes are two big-endian bytes and may not be zero. Running out of
/// input before the first size byte means the header was never
/// terminated; running out between the two bytes cuts the field itself.
fn consume_section_size(input: &[u8]) -> Result<(&[u8], u16), EofValidationError> {
    let Some((rest, size)) = consume_u16(input) else {
        return Err(if input.is_empty() {
            EofValidationError::SectionHeadersNotTerminated
        } else {
            EofValidationError::IncompleteSectionSize
        });
    };
    if size == 0 {
        return Err(EofValidationError::ZeroSectionSize);
    }
    Ok((rest, size))
}

/// Parses and validates the section header sequence of a container.
///
/// The prefix is not examined here; parsing starts just past the version
/// byte. `version` selects the set of permitted section ids. Returns at
/// the first violation of the header grammar.
fn validate_header_sections(
    version: u8,
    code: &[u8],
) -> Result<SectionHeaders, EofValidationError> {
    let mut code_size: Option<u16> = None;
    let mut data_size: Option<u16> = None;
    let mut table_sizes: Vec<u16> = Vec::new();

    let mut input = match code.get(HEADER_BASE..) {
        Some(rest) => rest,
        None => return Err(EofValidationError::SectionHeadersNotTerminated),
    };

    loop {
        let Some((rest, id)) = consume_u8(input) else {
            return Err(EofValidationError::SectionHeadersNotTerminated);
        };
        input = rest;

        match id {
            KIND_TERMINATOR => {
                let Some(code_size) = code_size else {
                    return Err(EofValidationError::CodeSectionMissing);
                };
                let headers = SectionHeaders {
                    code_size,
                    data_size: data_size.unwrap_or(0),
                    table_sizes,
                };
                // Whatever follows the terminator is the section bodies;
                // both truncation and trailing garbage are rejected here.
                if headers.body_size() != input.len() {
                    return Err(EofValidationError::InvalidSectionBodiesSize);
                }
                return Ok(headers);
            }
            KIND_CODE => {
                if code_size.is_some() {
                    return Err(EofValidationError::MultipleCodeSections);
                }
                let (rest, size) = consume_section_size(input)?;
                input = rest;
                code_size = Some(size);
            }
            KIND_DATA => {
                if code_size.is_none() {
                    return Err(EofValidationError::CodeSectionMissing);
                }
                if data_size.is_some() {
                    return Err(EofValidationError::MultipleDataSections);
                }
                let (rest, size) = consume_section_size(input)?;
                input = rest;
                data_size = Some(size);
            }
            KIND_TABLE => {
                if version < 2 {
                    return Err(EofValidationError::UnknownSectionId { id });
                }
                if code_size.is_none() {
                    return Err(EofValidationError::CodeSectionMissing);
                }
                let (rest, size) = consume_section_size(input)?;
                input = rest;
                if size % 2 != 0 {
                    return Err(EofValidationError::OddTableSectionSize);
                }
                table_sizes.push(size);
            }
            id => return Err(EofValidationError::UnknownSectionId { id }),
        }
    }
}

/// Validates the shape of a version 1 container and decodes its header.
///
/// The prefix and version byte are not examined; [`validate_eof`] composes
/// those checks with this one.
pub fn validate_eof1(code: &[u8]) -> Result<Eof1Header, EofValidationError> {
    let sections = validate_header_sections(1, code)?;
    Ok(Eof1Header {
        code_size: sections.code_size,
        data_size: sections.data_size,
    })
}

/// Validates the shape of a version 2 container and decodes its header.
///
/// The prefix and version byte are not examined; [`validate_eof`] composes
/// those checks with this one.
pub fn validate_eof2(code: &[u8]) -> Result<Eof2Header, EofValidationError> {
    let sections = validate_header_sections(2, code)?;
    Ok(Eof2Header {
        code_size: sections.code_size,
        data_size: sections.data_size,
        table_sizes: sections.table_sizes,
    })
}

/// Validates an EOF container under the given chain revision.
///
/// The same bytes may be legal at one revision and illegal at an earlier
/// one: versions 1 and 2 are both gated on [`SpecId::SHANGHAI`], and any
/// other version byte is never recognized.
pub fn validate_eof(spec_id: SpecId, code: &[u8]) -> Result<(), EofValidationError> {
    if !is_eof(code) {
        return Err(EofValidationError::InvalidPrefix);
    }
    match eof_version(code) {
        1 if spec_id.is_enabled_in(SpecId::SHANGHAI) => validate_eof1(code).map(|_| ()),
        2 if spec_id.is_enabled_in(SpecId::SHANGHAI) => validate_eof2(code).map(|_| ()),
        _ => Err(EofValidationError::UnknownVersion),
    }
}
