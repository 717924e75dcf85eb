//! `cosmos.crypto.multisig.v1beta1`

use cosmwire_codec::{cosmos_message, register_types, TypeRegistry};

/// MultiSignature wraps the signatures from a multisig.LegacyAminoPubKey.
/// See cosmos.tx.v1betata1.ModeInfo.Multi for how to specify which signers
/// signed and with which modes.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MultiSignature {
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub signatures: Vec<Vec<u8>>,
}

/// CompactBitArray is an implementation of a space efficient bit array.
/// This is used to ensure that the encoded data takes up a minimal amount of
/// space after proto encoding.
/// This is not thread safe, and is not intended for concurrent usage.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct CompactBitArray {
    #[prost(uint32, tag = "1")]
    pub extra_bits_stored: u32,
    #[prost(bytes = "vec", tag = "2")]
    pub elems: Vec<u8>,
}

impl CompactBitArray {
    /// Bit array of `bits` cleared bits
    pub fn new(bits: usize) -> Self {
        Self {
            extra_bits_stored: (bits % 8) as u32,
            elems: vec![0; bits.div_ceil(8)],
        }
    }

    /// Number of bits held
    pub fn len(&self) -> usize {
        match self.extra_bits_stored {
            0 => self.elems.len() * 8,
            extra => (self.elems.len().saturating_sub(1)) * 8 + extra as usize,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bit `index`, most significant bit first within each byte
    pub fn get(&self, index: usize) -> bool {
        if index >= self.len() {
            return false;
        }
        self.elems[index / 8] & (1 << (7 - index % 8)) != 0
    }

    /// Set bit `index`; returns `false` when out of range
    pub fn set(&mut self, index: usize, value: bool) -> bool {
        if index >= self.len() {
            return false;
        }
        let mask = 1u8 << (7 - index % 8);
        if value {
            self.elems[index / 8] |= mask;
        } else {
            self.elems[index / 8] &= !mask;
        }
        true
    }
}

cosmos_message!(MultiSignature => MultiSignatureAmino, MultiSignaturePartial;
    "/cosmos.crypto.multisig.v1beta1.MultiSignature", "cosmos-sdk/MultiSignature" {
        signatures: bytes_list,
    });

cosmos_message!(CompactBitArray => CompactBitArrayAmino, CompactBitArrayPartial;
    "/cosmos.crypto.multisig.v1beta1.CompactBitArray", "cosmos-sdk/CompactBitArray" {
        extra_bits_stored: uint32,
        elems: bytes,
    });

pub(crate) fn register(registry: &TypeRegistry) {
    register_types!(registry, [MultiSignature, CompactBitArray]);
}
