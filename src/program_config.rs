pub mod integer_literal;
pub mod program_constants;
