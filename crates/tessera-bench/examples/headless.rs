//! Headless driver for both engines.
//!
//! Stands in for a render loop: steps each engine once per "frame" and
//! prints the numbers a renderer would otherwise draw. Set `RUST_LOG=debug`
//! (or `trace`) to see the engines' own logging.

use std::error::Error;
use tessera_bench::{rd_reference, schelling_reference};
use tessera_core::{run_for, Simulation};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    println!("=== Tessera Headless Example ===\n");

    println!("Reaction-diffusion: 256x256 coral, circle seed");
    let mut rd = rd_reference(42)?;
    for frame in 0..=2000u32 {
        if frame % 500 == 0 {
            let b = rd.b_state();
            let mean = b.iter().map(|&v| f64::from(v)).sum::<f64>() / b.len() as f64;
            let active = b.iter().filter(|&&v| v > 0.2).count();
            println!("  frame {frame:>4}: mean B = {mean:.4}, active cells = {active}");
        }
        rd.step();
    }

    println!("\nSegregation: 100x100, density 0.5, want_similar 0.5");
    let mut model = schelling_reference(42)?;
    println!(
        "  start: segregation = {:.3}, happiness = {:.3}",
        model.segregation(),
        model.happiness()
    );
    let steps = run_for(&mut model, 1000);
    let dims = model.dims();
    println!(
        "  after {steps} steps: segregation = {:.3}, happiness = {:.3}, empty = {}/{}",
        model.segregation(),
        model.happiness(),
        model.empty_spots().len(),
        dims.cell_count()
    );

    Ok(())
}
