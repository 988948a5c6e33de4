//! The decompressor's header/metadata typestate: `Uninitialized -> Meta* -> Header -> Variant*`.
//!
//! Modeled as an explicit enum with guarded transition methods rather than boolean flags
//! (`got_meta`/`got_header`) scattered through the read loop, so an invalid transition is a typed
//! error at the call site instead of a silently-accepted malformed file.

use vcf_codec::HeaderStateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    Uninitialized,
    Meta,
    Header,
    Variant,
}

impl HeaderState {
    #[must_use]
    pub fn new() -> Self {
        Self::Uninitialized
    }

    /// Transition on seeing a `##` metadata line.
    ///
    /// # Errors
    /// Returns [`HeaderStateError::MetaAfterHeader`] if a header or variant line was already seen.
    pub fn to_meta(self) -> Result<Self, HeaderStateError> {
        match self {
            Self::Uninitialized | Self::Meta => Ok(Self::Meta),
            Self::Header | Self::Variant => Err(HeaderStateError::MetaAfterHeader),
        }
    }

    /// Transition on seeing the `#CHROM...` header line.
    ///
    /// # Errors
    /// Returns [`HeaderStateError::HeaderAfterHeader`] if the header line was already seen.
    pub fn to_header(self) -> Result<Self, HeaderStateError> {
        match self {
            Self::Meta => Ok(Self::Header),
            Self::Header | Self::Variant => Err(HeaderStateError::HeaderAfterHeader),
            Self::Uninitialized => Err(HeaderStateError::HeaderAfterHeader),
        }
    }

    /// Transition on seeing a variant data line.
    ///
    /// # Errors
    /// Returns [`HeaderStateError::VariantBeforeHeader`] if the header line has not yet been seen.
    pub fn to_variant(self) -> Result<Self, HeaderStateError> {
        match self {
            Self::Header | Self::Variant => Ok(Self::Variant),
            Self::Uninitialized | Self::Meta => Err(HeaderStateError::VariantBeforeHeader),
        }
    }
}

impl Default for HeaderState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path() {
        let state = HeaderState::new();
        let state = state.to_meta().unwrap();
        let state = state.to_meta().unwrap();
        let state = state.to_header().unwrap();
        let state = state.to_variant().unwrap();
        assert_eq!(state.to_variant().unwrap(), HeaderState::Variant);
    }

    #[test]
    fn header_may_not_repeat() {
        let state = HeaderState::new().to_meta().unwrap().to_header().unwrap();
        assert!(state.to_header().is_err());
    }

    #[test]
    fn meta_may_not_follow_header() {
        let state = HeaderState::new().to_meta().unwrap().to_header().unwrap();
        assert!(matches!(state.to_meta(), Err(HeaderStateError::MetaAfterHeader)));
    }

    #[test]
    fn meta_may_not_follow_variant() {
        let state = HeaderState::new()
            .to_meta()
            .unwrap()
            .to_header()
            .unwrap()
            .to_variant()
            .unwrap();
        assert!(matches!(state.to_meta(), Err(HeaderStateError::MetaAfterHeader)));
    }

    #[test]
    fn variant_before_header_is_rejected() {
        let state = HeaderState::new();
        assert!(matches!(state.to_variant(), Err(HeaderStateError::VariantBeforeHeader)));
        let state = state.to_meta().unwrap();
        assert!(matches!(state.to_variant(), Err(HeaderStateError::VariantBeforeHeader)));
    }

    #[test]
    fn header_without_any_metadata_is_rejected() {
        let state = HeaderState::new();
        assert!(state.to_header().is_err());
    }
}
