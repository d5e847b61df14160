use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
/// Where shader sources come from.
pub struct ShaderOptions {
    /// Directory to read `.wgsl` files from. `None` uses the sources
    /// compiled into the binary.
    pub directory: Option<PathBuf>,
}
