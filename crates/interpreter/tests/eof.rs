//! Frame setup over validated object-format containers.

use bytecode::{read_valid_eof1_header, read_valid_eof2_header, validate_eof};
use evmof_interpreter::{ExecutionState, ExecutionStatus};
use primitives::{bytes, hex, Bytes, SpecId};

#[test]
fn frame_over_eof1_container() {
    // Code "600100", data "beef".
    let raw = hex!("efcafe0101000302000200600100beef");
    validate_eof(SpecId::SHANGHAI, &raw).unwrap();

    let header = read_valid_eof1_header(&raw);
    let code = Bytes::copy_from_slice(&raw[header.code_begin()..header.code_end()]);
    let state = ExecutionState::new(code, 21_000, SpecId::SHANGHAI);

    assert_eq!(state.code, bytes!("600100"));
    assert_eq!(state.gas_left, 21_000);
    assert_eq!(state.status, ExecutionStatus::Success);
}

#[test]
fn frame_over_eof2_container() {
    // Code "00", one four-byte table.
    let raw = hex!("efcafe020100010300040000aabbccdd");
    validate_eof(SpecId::CANCUN, &raw).unwrap();

    let header = read_valid_eof2_header(&raw);
    assert_eq!(header.table_sizes, vec![4]);
    assert_eq!(&raw[header.tables_begin()..], &hex!("aabbccdd"));

    let code = Bytes::copy_from_slice(&raw[header.code_begin()..header.code_end()]);
    let mut state = ExecutionState::new(code, 1_000, SpecId::CANCUN);
    assert_eq!(state.code, bytes!("00"));

    // The frame is reusable across containers.
    state.reset(Bytes::new(), 0, SpecId::LATEST);
    assert_eq!(state.code.len(), 0);
    assert_eq!(state.gas_left, 0);
}
