use crate::Status;
use serde::{Deserialize, Serialize};

/// External service credentials loaded from a local JSON key store.
#[derive(Serialize, Deserialize, Default, Debug)]
pub struct Keys {
    pub rawg: RawgKeys,
}

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct RawgKeys {
    pub api_key: String,
}

impl Keys {
    pub fn from_file(path: &str) -> Result<Self, Status> {
        let file = std::fs::File::open(path)?;
        let keys = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(keys)
    }
}
