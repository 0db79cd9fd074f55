//! The OpenCL C built-in catalog: constants, casts, and function return
//! types. Ported from the language's built-in function tables; the
//! generated lists (`GEN1_FUNCTIONS`, `CAST_FUNCTIONS`, ...) are Cartesian
//! products over scalar type, vector width, rounding mode, and saturation,
//! same as the reference tables they're built from.
mod catalog;
mod resolve;

pub use catalog::{
    is_builtin_constant, is_builtin_function, is_reserved_word, CONSTANT_SYMBOLS,
};
pub use resolve::return_type;
