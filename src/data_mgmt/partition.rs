//! Routing of readings to output sinks.

use crate::data_mgmt::models::Reading;
use crate::plan::OutputSpec;

/// Return the indices of every output whose selector matches the reading's
/// kind. `partition_by` documents intended grouping only; routing is always
/// decided per reading against each output's own selector. A reading that
/// matches nothing is dropped by the caller.
pub fn route(reading: &Reading, outputs: &[OutputSpec]) -> Vec<usize> {
    outputs
        .iter()
        .enumerate()
        .filter(|(_, spec)| spec.selector.matches(reading.kind))
        .map(|(i, _)| i)
        .collect()
}
