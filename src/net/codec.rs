use bincode::error::{DecodeError, EncodeError};
use bincode::{decode_from_slice, encode_to_vec};

use super::protocol::{MirrorUpdate, Tank};

/// Shared binary configuration used by both ends of the mirror.
fn bincode_config() -> impl bincode::config::Config {
    bincode::config::standard()
}

/// Serialize a [`MirrorUpdate`] into a byte vector suitable for transport.
pub fn encode_mirror_update(update: &MirrorUpdate) -> Result<Vec<u8>, EncodeError> {
    encode_to_vec(update, bincode_config())
}

/// Deserialize a [`MirrorUpdate`] from a byte slice delivered by the transport.
pub fn decode_mirror_update(bytes: &[u8]) -> Result<MirrorUpdate, DecodeError> {
    let (update, _) = decode_from_slice(bytes, bincode_config())?;
    Ok(update)
}

/// Serialize one player's tank record for the per-player mirror slot.
pub fn encode_tank(tank: &Tank) -> Result<Vec<u8>, EncodeError> {
    encode_to_vec(tank, bincode_config())
}

/// Deserialize a remote tank record received from the mirror.
pub fn decode_tank(bytes: &[u8]) -> Result<Tank, DecodeError> {
    let (tank, _) = decode_from_slice(bytes, bincode_config())?;
    Ok(tank)
}
