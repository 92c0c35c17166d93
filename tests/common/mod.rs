#![allow(dead_code)]

pub use taskorder_test_utils::builders;
pub use taskorder_test_utils::init_tracing;
