//! # Resolver
//!
//! The "second pass": once every statement has been parsed and the flat
//! memory image is otherwise complete, two deferred queues remain to be
//! drained — immediate values (`#...`) that still need backing storage
//! synthesized and deduplicated, and label uses (instruction operands,
//! `.LSB`/`.MSB` operands) whose target addresses are only now all known.

use crate::error::{AssemblerError, ErrorKind};
use crate::lexer::literal::{CHAR_MIN, UCHAR_MAX};
use crate::memory::{DataType, ADDRESS_SPACE_SIZE};

use super::{AssemblerState, LabelDefinition, LabelUse};

/// Synthesizes backing storage for every queued immediate value, reusing a
/// single byte per distinct value (e.g. two `#5` operands share one byte)
/// and recording a label at that address so the usual label-use patching
/// mechanism can wire the operand up to it.
pub(super) fn resolve_immediates(state: &mut AssemblerState) -> Result<(), AssemblerError> {
    let uses = std::mem::take(&mut state.immediate_uses);
    for use_ in uses {
        if !(CHAR_MIN..=UCHAR_MAX).contains(&use_.value) {
            let kind = if use_.is_char {
                ErrorKind::CharacterLiteralOutOfRange
            } else {
                ErrorKind::NumberLiteralOutOfRange
            };
            return Err(AssemblerError::new(kind, use_.line));
        }
        let byte = use_.value as u8;

        let existing = state.immediate_labels_by_value(use_.is_char)[byte as usize].clone();
        let label_name = match existing {
            Some(name) => name,
            None => {
                if state.address >= ADDRESS_SPACE_SIZE {
                    return Err(AssemblerError::new(
                        ErrorKind::ImmediateValueDeclarationOutOfMemoryRange,
                        use_.line,
                    ));
                }
                let addr = state.address;
                let ty = if use_.is_char { DataType::Char } else { DataType::Int };
                state.write_byte(addr, byte, ty, use_.line)?;
                state.address += 1;

                let name = use_.raw_text.clone();
                state.immediate_labels_by_value(use_.is_char)[byte as usize] = Some(name.clone());
                state.label_definitions.push(LabelDefinition { name: name.clone(), address: addr });
                name
            }
        };

        state.label_uses.push(LabelUse {
            name: label_name.clone(),
            offset: 0,
            byte_index: 0,
            patch_address: use_.instr_address,
            line: use_.line,
        });
        state.label_uses.push(LabelUse {
            name: label_name,
            offset: 0,
            byte_index: 1,
            patch_address: use_.instr_address + 1,
            line: use_.line,
        });
    }
    Ok(())
}

/// Patches every queued label use into the memory image. Each use
/// OR-assigns its resolved byte rather than overwriting, since instruction
/// encoding has already written the opcode bits into the same byte.
pub(super) fn resolve_labels(state: &mut AssemblerState) -> Result<(), AssemblerError> {
    for use_ in &state.label_uses {
        let def = state
            .label_definitions
            .iter()
            .find(|d| d.name == use_.name)
            .ok_or_else(|| AssemblerError::new(ErrorKind::UndefinedLabel, use_.line))?;

        let evaluated = def.address as i64 + use_.offset as i64;
        if evaluated < 0 || evaluated >= ADDRESS_SPACE_SIZE as i64 {
            return Err(AssemblerError::new(ErrorKind::ReferenceToInvalidAddress, use_.line));
        }

        let byte = (evaluated >> (use_.byte_index as i64 * 8)) & 0xFF;
        state.memory[use_.patch_address] |= byte as u8;
    }
    Ok(())
}
