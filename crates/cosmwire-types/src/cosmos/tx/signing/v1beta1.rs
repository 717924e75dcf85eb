//! `cosmos.tx.signing.v1beta1` sign modes

use cosmwire_codec::amino::enum_from_json;

/// SignMode represents a signing mode with its own security guarantees.
///
/// This enum should be considered a registry of all known sign modes
/// in the Cosmos ecosystem. Apps are not expected to support all known
/// sign modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SignMode {
    /// SIGN_MODE_UNSPECIFIED specifies an unknown signing mode and will be
    /// rejected.
    Unspecified = 0,
    /// SIGN_MODE_DIRECT specifies a signing mode which uses SignDoc and is
    /// verified with raw bytes from Tx.
    Direct = 1,
    /// SIGN_MODE_TEXTUAL is a future signing mode that will verify some
    /// human-readable textual representation on top of the binary representation
    /// from SIGN_MODE_DIRECT.
    Textual = 2,
    /// SIGN_MODE_DIRECT_AUX specifies a signing mode which uses
    /// SignDocDirectAux.
    DirectAux = 3,
    /// SIGN_MODE_LEGACY_AMINO_JSON is a backwards compatibility mode which uses
    /// Amino JSON and will be removed in the future.
    LegacyAminoJson = 127,
    /// SIGN_MODE_EIP_191 specifies the sign mode for EIP 191 signing on the Cosmos
    /// SDK.
    Eip191 = 191,
    /// Placeholder for values this version does not know
    Unrecognized = -1,
}

impl SignMode {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            SignMode::Unspecified => "SIGN_MODE_UNSPECIFIED",
            SignMode::Direct => "SIGN_MODE_DIRECT",
            SignMode::Textual => "SIGN_MODE_TEXTUAL",
            SignMode::DirectAux => "SIGN_MODE_DIRECT_AUX",
            SignMode::LegacyAminoJson => "SIGN_MODE_LEGACY_AMINO_JSON",
            SignMode::Eip191 => "SIGN_MODE_EIP_191",
            SignMode::Unrecognized => "UNRECOGNIZED",
        }
    }

    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "SIGN_MODE_UNSPECIFIED" => Some(Self::Unspecified),
            "SIGN_MODE_DIRECT" => Some(Self::Direct),
            "SIGN_MODE_TEXTUAL" => Some(Self::Textual),
            "SIGN_MODE_DIRECT_AUX" => Some(Self::DirectAux),
            "SIGN_MODE_LEGACY_AMINO_JSON" => Some(Self::LegacyAminoJson),
            "SIGN_MODE_EIP_191" => Some(Self::Eip191),
            _ => None,
        }
    }

    /// Accepts the number or the name, anything else is `Unrecognized`
    pub fn from_json(value: &serde_json::Value) -> Self {
        enum_from_json(value, Self::from_str_name, |n| Self::try_from(n).ok())
            .unwrap_or(Self::Unrecognized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_mode_names() {
        assert_eq!(SignMode::Direct.as_str_name(), "SIGN_MODE_DIRECT");
        assert_eq!(
            SignMode::from_str_name("SIGN_MODE_LEGACY_AMINO_JSON"),
            Some(SignMode::LegacyAminoJson)
        );
        assert_eq!(SignMode::from_json(&serde_json::json!(127)), SignMode::LegacyAminoJson);
        assert_eq!(SignMode::from_json(&serde_json::json!("SIGN_MODE_TEXTUAL")), SignMode::Textual);
        assert_eq!(SignMode::from_json(&serde_json::json!(5)), SignMode::Unrecognized);
        assert_eq!(SignMode::from_json(&serde_json::Value::Null), SignMode::Unrecognized);
    }
}
