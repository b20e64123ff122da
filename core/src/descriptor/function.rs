use bitflags::bitflags;

use super::DescriptorId;
use crate::Vec;
use crate::error::DescriptorError;

bitflags! {
    /// Packed flags word of a function type record.
    ///
    /// Bits 0..24 hold the argument count, bits 24..28 the calling
    /// convention, bit 28 whether the function throws.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct FunctionTypeFlags: u32 {
        const THROWS = 0x1000_0000;

        const _ = !0;
    }
}

impl FunctionTypeFlags {
    const NUM_ARGUMENTS_MASK: u32 = 0x00FF_FFFF;
    const CONVENTION_MASK: u32 = 0x0F00_0000;
    const CONVENTION_SHIFT: u32 = 24;

    pub fn new(convention: FunctionConvention, num_arguments: usize, throws: bool) -> Self {
        debug_assert!(num_arguments as u32 <= Self::NUM_ARGUMENTS_MASK);
        let mut bits = (num_arguments as u32 & Self::NUM_ARGUMENTS_MASK)
            | ((convention as u32) << Self::CONVENTION_SHIFT);
        if throws {
            bits |= Self::THROWS.bits();
        }
        Self::from_bits_retain(bits)
    }

    pub fn num_arguments(self) -> usize {
        (self.bits() & Self::NUM_ARGUMENTS_MASK) as usize
    }

    pub fn convention(self) -> Result<FunctionConvention, DescriptorError> {
        let raw = ((self.bits() & Self::CONVENTION_MASK) >> Self::CONVENTION_SHIFT) as u8;
        FunctionConvention::try_from(raw)
    }

    pub fn throws(self) -> bool {
        self.contains(Self::THROWS)
    }
}

/// Calling convention of a function type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FunctionConvention {
    /// Native thick function (context + entry point).
    Swift = 0,
    /// Block from the foreign object model.
    Block = 1,
    /// Bare C function pointer.
    CFunctionPointer = 2,
    /// Entry point without context.
    Thin = 3,
}

impl TryFrom<u8> for FunctionConvention {
    type Error = DescriptorError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(FunctionConvention::Swift),
            1 => Ok(FunctionConvention::Block),
            2 => Ok(FunctionConvention::CFunctionPointer),
            3 => Ok(FunctionConvention::Thin),
            _ => Err(DescriptorError::InvalidConvention(raw)),
        }
    }
}

/// One formal argument of a function type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionArgument {
    pub ty: DescriptorId,
    /// Passed by reference (`inout`).
    pub inout: bool,
}

impl FunctionArgument {
    pub fn new(ty: DescriptorId) -> Self {
        Self { ty, inout: false }
    }

    pub fn inout(ty: DescriptorId) -> Self {
        Self { ty, inout: true }
    }
}

/// Function type record.
///
/// The convention is validated on construction, so every value reaching the
/// tree builder maps to exactly one function node kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionMetadata {
    convention: FunctionConvention,
    throws: bool,
    arguments: Vec<FunctionArgument>,
    result: DescriptorId,
}

impl FunctionMetadata {
    pub fn new(
        convention: FunctionConvention,
        throws: bool,
        arguments: impl IntoIterator<Item = FunctionArgument>,
        result: DescriptorId,
    ) -> Self {
        Self {
            convention,
            throws,
            arguments: arguments.into_iter().collect(),
            result,
        }
    }

    /// Decode a record from its packed flags word.
    pub fn from_raw(
        flags: FunctionTypeFlags,
        arguments: impl IntoIterator<Item = FunctionArgument>,
        result: DescriptorId,
    ) -> Result<Self, DescriptorError> {
        let convention = flags.convention()?;
        let arguments: Vec<_> = arguments.into_iter().collect();
        if arguments.len() != flags.num_arguments() {
            return Err(DescriptorError::ArgumentCountMismatch {
                expected: flags.num_arguments(),
                found: arguments.len(),
            });
        }
        Ok(Self {
            convention,
            throws: flags.throws(),
            arguments,
            result,
        })
    }

    pub fn flags(&self) -> FunctionTypeFlags {
        FunctionTypeFlags::new(self.convention, self.arguments.len(), self.throws)
    }

    pub fn convention(&self) -> FunctionConvention {
        self.convention
    }

    pub fn throws(&self) -> bool {
        self.throws
    }

    pub fn arguments(&self) -> &[FunctionArgument] {
        &self.arguments
    }

    pub fn result(&self) -> DescriptorId {
        self.result
    }
}
