//! # W16 Assembler
//!
//! A two-pass assembler for the W16 8-bit computer architecture.
//!
//! ## Pipeline
//!
//! 1. **Lexer** ([`lexer`]) - pulls tokens from the source one at a time.
//! 2. **Assembler** ([`assembler`]) - parses each statement and emits its
//!    bytes directly into the memory image, queuing label and immediate-value
//!    uses it cannot resolve yet.
//! 3. **Resolver** ([`assembler::resolver`]) - synthesizes backing storage
//!    for immediate values, then patches every queued label use now that all
//!    addresses are known.
//!
//! ## Example
//!
//! ```rust,no_run
//! let source = std::fs::read("program.asm").unwrap();
//! match w16asm::assemble(&source) {
//!     Ok(result) => println!("assembled {} bytes", w16asm::output::program_size(&result)),
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

pub mod assembler;
pub mod error;
pub mod lexer;
pub mod memory;
pub mod output;

pub use assembler::assemble;
pub use error::{AssemblerError, ErrorKind};
pub use memory::{AssemblerResult, DataType};
