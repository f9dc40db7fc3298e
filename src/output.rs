//! # Output formatting
//!
//! Pure functions over an [`AssemblerResult`] that the binary calls to
//! produce the two on-disk artifacts: the raw binary image and the
//! (optional) symbol table CSV. Kept separate from `main.rs` so the
//! formatting rules are unit-testable without touching the filesystem.

use crate::memory::{AssemblerResult, DataType, IO_INTERFACE_ADDRESS};

/// The address one past the last occupied byte: the highest address with
/// `data_type[addr] != DataType::None`, plus one (or plus two if that
/// address holds an `Instruction`, since its second byte carries
/// `DataType::None` but is still part of the program).
pub fn program_size(result: &AssemblerResult) -> usize {
    let mut size = 0usize;
    for (addr, ty) in result.data_type.iter().enumerate() {
        if *ty == DataType::None {
            continue;
        }
        let end = match ty {
            DataType::Instruction => addr + 2,
            _ => addr + 1,
        };
        if end > size {
            size = end;
        }
    }
    size
}

fn kind_name(ty: DataType) -> &'static str {
    match ty {
        DataType::None => "",
        DataType::Instruction => "instruction",
        DataType::Char => "char",
        DataType::Int => "int",
    }
}

/// Builds the symbol table CSV: one `0x{addr:04X},{kind},{label}` line per
/// address that is either occupied or carries a label definition.
pub fn symbol_table_csv(result: &AssemblerResult) -> String {
    let mut out = String::new();
    for addr in 0..result.data_type.len() {
        let ty = result.data_type[addr];
        let label = result.label_name_by_address[addr].as_deref();
        if ty == DataType::None && label.is_none() {
            continue;
        }
        let kind = if addr == IO_INTERFACE_ADDRESS {
            "char"
        } else {
            kind_name(ty)
        };
        out.push_str(&format!("0x{:04X},{},{}\n", addr, kind, label.unwrap_or("")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::ADDRESS_SPACE_SIZE;

    fn empty_result() -> AssemblerResult {
        AssemblerResult {
            program_memory: Box::new([0u8; ADDRESS_SPACE_SIZE]),
            data_type: Box::new(std::array::from_fn(|_| DataType::None)),
            label_name_by_address: vec![None; ADDRESS_SPACE_SIZE],
        }
    }

    #[test]
    fn empty_program_has_zero_size() {
        assert_eq!(program_size(&empty_result()), 0);
    }

    #[test]
    fn instruction_occupies_two_bytes() {
        let mut result = empty_result();
        result.data_type[4] = DataType::Instruction;
        assert_eq!(program_size(&result), 6);
    }

    #[test]
    fn csv_includes_label_only_rows() {
        let mut result = empty_result();
        result.label_name_by_address[10] = Some("loop".to_string());
        let csv = symbol_table_csv(&result);
        assert_eq!(csv, "0x000A,,loop\n");
    }

    #[test]
    fn csv_forces_io_interface_address_to_char() {
        let mut result = empty_result();
        result.data_type[IO_INTERFACE_ADDRESS] = DataType::Int;
        let csv = symbol_table_csv(&result);
        assert!(csv.contains("0x1FFF,char,"));
    }
}
