use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Named output splits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetSplit {
    Train,
    Validation,
}

impl DatasetSplit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetSplit::Train => "train",
            DatasetSplit::Validation => "validation",
        }
    }

    pub fn all() -> Vec<DatasetSplit> {
        vec![DatasetSplit::Train, DatasetSplit::Validation]
    }
}

impl fmt::Display for DatasetSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetSplit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "train" => Ok(DatasetSplit::Train),
            "validation" | "val" => Ok(DatasetSplit::Validation),
            other => Err(format!("unknown split '{}'", other)),
        }
    }
}
