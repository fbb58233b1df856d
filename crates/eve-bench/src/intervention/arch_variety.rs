//! Mono-plane, static-target aortic-arch benchmark with varying arch shapes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::InterventionError;
use super::instrument::Instrument;
use super::types::{AorticArchRandom, CenterlineRandom, Pillow, SofaBeamAdapter};

/// Complete parameter set of the arch-variety image benchmark (version 2).
///
/// Every collaborator is external; this record only fixes what they are
/// constructed with.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArchVarietyImageV2 {
    pub vessel_tree: AorticArchRandom,
    pub instruments: Vec<Instrument>,
    pub simulation: SofaBeamAdapter,
    pub fluoroscopy: Pillow,
    pub target: CenterlineRandom,
    pub stop_instrument_at_tree_end: bool,
    pub normalize_action: bool,
}

impl Default for ArchVarietyImageV2 {
    fn default() -> Self {
        Self {
            vessel_tree: AorticArchRandom::default(),
            instruments: vec![Instrument::default()],
            simulation: SofaBeamAdapter::default(),
            fluoroscopy: Pillow::default(),
            target: CenterlineRandom::default(),
            stop_instrument_at_tree_end: true,
            normalize_action: false,
        }
    }
}

impl ArchVarietyImageV2 {
    pub fn new(
        episodes_between_arch_change: u32,
        stop_instrument_at_tree_end: bool,
        normalize_action: bool,
    ) -> Result<Self, InterventionError> {
        let env = Self {
            vessel_tree: AorticArchRandom {
                episodes_between_change: episodes_between_arch_change,
                ..AorticArchRandom::default()
            },
            stop_instrument_at_tree_end,
            normalize_action,
            ..Self::default()
        };
        env.validate()?;
        Ok(env)
    }

    /// Replace the instrument list with a single instrument.
    pub fn with_instrument(
        mut self,
        instrument: impl Into<Instrument>,
    ) -> Result<Self, InterventionError> {
        let instrument = instrument.into();
        instrument.validate()?;
        self.instruments = vec![instrument];
        Ok(self)
    }

    #[inline]
    pub fn episodes_between_arch_change(&self) -> u32 {
        self.vessel_tree.episodes_between_change
    }

    pub fn validate(&self) -> Result<(), InterventionError> {
        self.vessel_tree.validate()?;
        if self.instruments.is_empty() {
            return Err(InterventionError::invalid(
                "instruments",
                "need at least one instrument",
            ));
        }
        for instrument in &self.instruments {
            instrument.validate()?;
        }
        self.simulation.validate()?;
        self.fluoroscopy.validate()?;
        self.target.validate()?;
        Ok(())
    }
}
