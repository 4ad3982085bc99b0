use anyhow::{bail, Result};
use tracing::info;

/// Verify the chain id reported by the upstream stream.
pub fn check_chain_id(stream_chain_id: Option<u64>, expected: u64) -> Result<u64> {
    match stream_chain_id {
        Some(id) if id == expected => {
            info!("✅ Using chain id {} for extraction", id);
            Ok(id)
        }
        Some(id) => bail!(
            "upstream stream reports chain id {} but the config expects {}",
            id,
            expected
        ),
        None => {
            info!("✅ Upstream reports no chain id; assuming {}", expected);
            Ok(expected)
        }
    }
}
