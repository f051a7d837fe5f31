//! Ordered batch transform over the normalized input units.

use crate::charset::Charset;
use crate::codec::Mode;
use crate::error::Error;

/// Transform every unit in input order. The first failure aborts the
/// whole batch with the offending unit's 1-based index; results
/// collected up to that point are discarded with it.
pub fn process(units: &[String], mode: Mode, charset: Charset) -> Result<Vec<String>, Error> {
    let total = units.len();
    let mut results = Vec::with_capacity(total);
    for (pos, unit) in units.iter().enumerate() {
        let index = pos + 1;
        let transformed = mode
            .apply(unit, charset)
            .map_err(|source| Error::Decode { index, source })?;
        log::info!("[{index}/{total}] {transformed}");
        results.push(transformed);
    }
    Ok(results)
}
