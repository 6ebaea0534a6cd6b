//! diskonet quickstart: from a run's setup block to rendered-ready fields.
//!
//! Demonstrates:
//!   1. Reading a disk setup and building a staggered grid
//!   2. Mapping slider-style controls to physical parameters
//!   3. Wrapping a model as a vectorized predictor
//!   4. Evaluating all three quantities with metrics
//!   5. Summarizing each field for a colour bar
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example quickstart

use diskonet::eval::labels::{latex_float, planet_mass_in_jupiter};
use diskonet::prelude::*;
use tracing::info;

// ─── Stand-in model ─────────────────────────────────────────────
//
// A gapped power-law disk. A real deployment would run the trained
// network's forward pass here.

fn disk_model(input: &PredictInput<'_>) -> Vec<f64> {
    let (u, y) = (input.u_net(), input.y_net());
    (0..input.rows())
        .map(|k| {
            let (alpha, h, q) = (u[[k, 0]], u[[k, 1]], u[[k, 2]]);
            let (r, theta) = (y[[k, 0]], y[[k, 1]]);
            let depth = 1.0 - 1.0 / (1.0 + 0.04 * q * q / (alpha * h.powi(5)));
            let gap = depth * (-((r - 1.0) / h).powi(2)).exp();
            (r.powf(-0.5) * (1.0 - gap) * (1.0 + 0.01 * theta.cos())).log10()
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // ─── Grid ───────────────────────────────────────────────────
    let setup: DiskSetup =
        serde_json::from_str(r#"{"ymin": "0.4", "ymax": "2.5", "ny": "128", "nx": "384"}"#)?;
    let grid = StaggeredGrid::from_domain(setup.domain()?);
    let (n_r, n_theta) = grid.shape();
    info!(n_r, n_theta, "grid ready");

    // ─── Parameters ─────────────────────────────────────────────
    let space = ParameterSpace::ppd_default();
    for axis in space.axes() {
        info!(axis = %axis.name, marks = ?axis.mark_labels(4), "parameter axis");
    }
    let params = space.batch_from_controls([space.defaults(), vec![-3.5, 0.07, -3.3]])?;
    for (b, row) in params.values().rows().into_iter().enumerate() {
        info!(
            b,
            alpha = %latex_float(row[0]),
            aspect_ratio = row[1],
            planet_mass_mj = planet_mass_in_jupiter(row[2]),
            "parameter vector"
        );
    }

    // ─── Evaluation ─────────────────────────────────────────────
    let model = FnPredictor::new("gapped_disk", disk_model)
        .vectorized()
        .with_n_params(space.len());
    let evaluator = FieldEvaluator::with_config(
        model,
        EvalConfig {
            parallel: true,
            ..EvalConfig::default()
        },
    );

    for layout in QuantityLayout::ALL {
        let (field, metrics) = evaluator.evaluate_with_metrics(&grid, layout, &params)?;
        info!(
            %layout,
            total_us = metrics.total_us,
            calls = metrics.predict_calls,
            predictions = metrics.predictions(),
            "evaluated"
        );
        for b in 0..field.batch() {
            if let Some(range) = field.range(b) {
                println!(
                    "{layout:>7} [{b}] log10 range [{:.3}, {:.3}], decade ticks {:?}",
                    range.vmin,
                    range.vmax,
                    range.decade_ticks()
                );
            }
        }
    }

    Ok(())
}
