pub mod codegen;


pub use codegen::{CodeGenerator, CodegenError};
