//! Benchmark profiles for the Tessera engines.
//!
//! Provides pre-built engines for benchmarks and examples:
//!
//! - [`rd_reference`]: 256x256 reaction-diffusion (64K cells), `circle` seed
//! - [`rd_stress`]: 1024x1024 reaction-diffusion (~1M cells), `random` seed
//! - [`schelling_reference`]: 100x100 segregation model (10K cells)
//! - [`schelling_stress`]: 500x500 segregation model (250K cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use log::debug;
use std::error::Error;
use tessera_rd::{RdParams, ReactionDiffusion, SeedPattern, DEFAULT_SEED_RADIUS};
use tessera_schelling::{SchellingParams, SegregationModel};

/// Build a seeded reaction-diffusion engine of the given size.
pub fn rd_profile(
    side: u32,
    params: RdParams,
    pattern: SeedPattern,
    seed: u64,
) -> Result<ReactionDiffusion, Box<dyn Error>> {
    let mut rd = ReactionDiffusion::new(side, side, params, seed)?;
    rd.initialize(pattern, DEFAULT_SEED_RADIUS)?;
    debug!("rd profile {side}x{side} seeded with {pattern}");
    Ok(rd)
}

/// 256x256 coral parameters, centred `circle` seed.
pub fn rd_reference(seed: u64) -> Result<ReactionDiffusion, Box<dyn Error>> {
    rd_profile(256, RdParams::CORAL, SeedPattern::Circle, seed)
}

/// 1024x1024 mitosis parameters, noise seed.
pub fn rd_stress(seed: u64) -> Result<ReactionDiffusion, Box<dyn Error>> {
    rd_profile(1024, RdParams::MITOSIS, SeedPattern::Random, seed)
}

/// 100x100 segregation model with default density and threshold.
pub fn schelling_reference(seed: u64) -> Result<SegregationModel, Box<dyn Error>> {
    Ok(SegregationModel::new(
        100,
        100,
        SchellingParams::default(),
        seed,
    )?)
}

/// 500x500 segregation model, denser and less tolerant than the reference.
pub fn schelling_stress(seed: u64) -> Result<SegregationModel, Box<dyn Error>> {
    let params = SchellingParams {
        density: 0.8,
        want_similar: 0.6,
    };
    Ok(SegregationModel::new(500, 500, params, seed)?)
}
