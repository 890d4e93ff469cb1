//! WebAssembly entry point for browser hosts.
//!
//! ```javascript
//! import init, { getChartOptions } from 'chart-adapter';
//!
//! await init();
//! const options = JSON.parse(getChartOptions(JSON.stringify(request)));
//! echarts.init(element).setOption(options);
//! ```

use wasm_bindgen::prelude::*;

use crate::api::convert_json_str;
use crate::error::ChartError;

/// Converts a request document (JSON text) into an options document.
///
/// Failures are thrown as the error message string.
#[wasm_bindgen(js_name = getChartOptions)]
pub fn get_chart_options(input: &str) -> Result<String, JsValue> {
    convert_json_str(input)
        .and_then(|options| {
            serde_json::to_string(&options).map_err(|e| ChartError::Serialize(e.to_string()))
        })
        .map_err(|err| JsValue::from_str(&err.to_string()))
}
