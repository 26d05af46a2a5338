use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endian {
    #[default]
    Little,
    Big,
}

/// Settings shared by decode and encode. A decoded document remembers the
/// options it was read with and encodes with the same ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecOptions {
    pub endian: Endian,
}

impl CodecOptions {
    pub fn big_endian() -> Self {
        Self {
            endian: Endian::Big,
        }
    }
}
