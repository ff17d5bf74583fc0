//! Tests mirroring `src/eval`

mod parser;
