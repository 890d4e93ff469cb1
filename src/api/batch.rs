#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ChartResult;

use super::json_contract::ChartRequest;

/// Converts independent requests, keeping results in input order.
///
/// Requests share nothing, so with the `parallel` feature they are spread
/// across the rayon pool. Each slot holds that request's own result.
pub fn convert_batch(requests: &[ChartRequest]) -> Vec<ChartResult<Map<String, Value>>> {
    debug!(requests = requests.len(), "convert batch");

    #[cfg(feature = "parallel")]
    {
        requests.par_iter().map(ChartRequest::convert).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        requests.iter().map(ChartRequest::convert).collect()
    }
}
