// paygtoken/src/protocol/payload.rs

use super::catalog::{CommandDefinition, PayloadRule};
use crate::{Error, Result};

/// Validate a payload string against a command's rule and return the value
/// written into the signed record.
///
/// Rule violations are checked before a fixed payload is substituted, so
/// `lock` rejects `"1"` while `demo_mode` ignores whatever it is given.
pub fn encode_payload(def: &CommandDefinition, input: Option<&str>) -> Result<u32> {
    let text = input.map(str::trim).unwrap_or("");

    if text.is_empty() {
        return match (def.fixed_payload, def.rule) {
            (Some(fixed), _) => Ok(fixed),
            (None, PayloadRule::MustBeAbsent) => Ok(0),
            (None, _) => Err(Error::invalid_payload(def.name, "payload is required")),
        };
    }

    let parsed: i64 = match text.parse() {
        Ok(v) => v,
        Err(_) => {
            return match (def.fixed_payload, def.rule) {
                (Some(fixed), PayloadRule::Integer) => Ok(fixed),
                _ => Err(Error::invalid_payload(
                    def.name,
                    format!("'{}' is not an integer", text),
                )),
            };
        }
    };

    match def.rule {
        PayloadRule::MustBeZero | PayloadRule::MustBeAbsent if parsed != 0 => {
            return Err(Error::invalid_payload(def.name, "payload must be 0"));
        }
        _ => {}
    }

    if let Some(fixed) = def.fixed_payload {
        return Ok(fixed);
    }

    u32::try_from(parsed).map_err(|_| {
        Error::invalid_payload(
            def.name,
            format!("{} does not fit an unsigned 32-bit field", parsed),
        )
    })
}
