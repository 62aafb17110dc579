mod cbc;
mod util;

pub use cbc::{cbc_core_dec_parallel, cbc_core_dec_serial, cbc_core_enc};
pub use util::PARALLEL_THRESHOLD;

#[cfg(test)]
pub(crate) use util::test_util;
