//! Console surface: styled output helpers and the self-test demonstration.

pub mod demo;
pub mod output;
