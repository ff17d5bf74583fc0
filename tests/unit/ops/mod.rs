//! Tests mirroring `src/ops`
