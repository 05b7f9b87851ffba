//! Capability negotiation.
//!
//! Decides per type whether values go to the driver untouched or through
//! a client-side codec. Intervals and binary BLOBs are always converted in
//! process; numerics only when the driver cannot do it.

use crate::codec::Codec;
use crate::types::{FbType, TypeFamily, TypeKind};

/// What the driver underneath converts natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverCapabilities {
    pub native_decimal: bool,
}

impl Default for DriverCapabilities {
    fn default() -> Self {
        Self {
            native_decimal: true,
        }
    }
}

/// Where a type's values are converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// Driver converts; the pipeline passes values through
    Native,
    /// A codec in this crate converts
    InProcess,
}

pub const fn conversion_for(kind: TypeKind, caps: &DriverCapabilities) -> Conversion {
    match kind.family() {
        TypeFamily::Interval => Conversion::InProcess,
        TypeFamily::Blob if matches!(kind, TypeKind::Blob) => Conversion::InProcess,
        TypeFamily::ExactNumeric | TypeFamily::ApproxNumeric => {
            if caps.native_decimal {
                Conversion::Native
            } else {
                Conversion::InProcess
            }
        }
        _ => Conversion::Native,
    }
}

/// Codec the pipeline runs for `ty`. Native types get `Codec::Identity`.
pub fn codec_for(ty: &FbType, caps: &DriverCapabilities) -> Codec {
    match conversion_for(ty.kind(), caps) {
        Conversion::Native => Codec::Identity,
        Conversion::InProcess => Codec::for_type(ty),
    }
}
