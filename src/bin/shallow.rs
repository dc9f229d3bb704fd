//! Shallow water ocean model
//!
//! Without arguments, reads `ncol n_slices steps_per_slice row col` from
//! stdin and prints H, dH/dT, U, V and the U rotation term at (row, col).

use clap::Parser;
use gwm::cli::{self, CommonArgs, GraderInput};
use gwm_core::GwmResult;
use gwm_models::ocean::{CellValues, ShallowWaterModel};
use gwm_models::parameters::{
    CoriolisAlgorithm, Perturbation, RotationScheme, ShallowWaterParameters, WindScheme,
};
use ndarray::{s, Array2};
use serde::Serialize;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "shallow")]
#[command(about = "Wind and rotation driven flow on a small staggered grid")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Number of grid columns and rows
    #[arg(short, long)]
    ncol: Option<usize>,

    /// Number of slices to run
    #[arg(short = 'N', long)]
    slices: Option<usize>,

    /// Time steps per slice
    #[arg(short = 'a', long)]
    steps: Option<usize>,

    /// Connect the eastern and western edges
    #[arg(short = 'H', long)]
    wrap: bool,

    /// Rotation scheme: WithLatitude, PlusMinus, Uniform or None
    #[arg(short, long)]
    rotation: Option<RotationScheme>,

    /// Rotation algorithm: trivial, easy or interpolated
    #[arg(short = 'g', long)]
    coriolis: Option<CoriolisAlgorithm>,

    /// Wind scheme: Curled, Uniform or None
    #[arg(short = 'w', long)]
    wind: Option<WindScheme>,

    /// Initial perturbation: Tower, NSGradient, EWGradient or None
    #[arg(short, long)]
    perturbation: Option<Perturbation>,

    /// Row of the reported cell
    #[arg(long, default_value_t = 2)]
    row: usize,

    /// Column of the reported cell
    #[arg(long, default_value_t = 2)]
    col: usize,

    /// Log every array after each slice (needs -vv)
    #[arg(short, long)]
    dump: bool,
}

impl Args {
    fn apply(&self, parameters: &mut ShallowWaterParameters) {
        if let Some(n) = self.ncol {
            parameters.ncol = n;
            parameters.nrow = n;
        }
        if let Some(slices) = self.slices {
            parameters.n_slices = slices;
        }
        if let Some(steps) = self.steps {
            parameters.steps_per_slice = steps;
        }
        if self.wrap {
            parameters.horizontal_wrap = true;
        }
        if let Some(rotation) = self.rotation {
            parameters.rotation_scheme = rotation;
        }
        if let Some(coriolis) = self.coriolis {
            parameters.coriolis = coriolis;
        }
        if let Some(wind) = self.wind {
            parameters.wind_scheme = wind;
        }
        if let Some(perturbation) = self.perturbation {
            parameters.initial_perturbation = perturbation;
        }
    }
}

#[derive(Serialize)]
struct Output {
    parameters: ShallowWaterParameters,
    days: Vec<f64>,
    /// Elevation after each slice, ghost column removed.
    elevation: Vec<Array2<f64>>,
    cell: CellValues,
}

fn print_cell(cell: &CellValues) -> GwmResult<()> {
    cli::print_numbers(&[cell.h, cell.dh_dt, cell.u, cell.v, cell.coriolis_u])
}

fn run_grader() -> GwmResult<()> {
    let mut input = GraderInput::from_stdin()?;
    let ncol = input.next("ncol")?;
    let n_slices = input.next("number of slices")?;
    let steps_per_slice = input.next("steps per slice")?;
    let row = input.next("row")?;
    let col = input.next("column")?;

    let mut model = ShallowWaterModel::from_parameters(ShallowWaterParameters {
        n_slices,
        steps_per_slice,
        ..ShallowWaterParameters::square(ncol)
    })?;
    model.run();
    print_cell(&model.value_at(row, col)?)
}

fn run(args: &Args) -> GwmResult<()> {
    let mut parameters: ShallowWaterParameters = args.common.load_parameters()?;
    args.apply(&mut parameters);

    let mut model = ShallowWaterModel::from_parameters(parameters)?;
    // Fail on a bad cell before running
    model.value_at(args.row, args.col)?;

    let ncol = model.parameters().ncol;
    let mut days = Vec::new();
    let mut elevation = Vec::new();
    let dump = args.dump;
    model.run_with(|_, m| {
        if dump {
            m.state().dump(m.steps_taken());
        }
        days.push(m.elapsed_days());
        elevation.push(m.state().h.slice(s![.., 0..ncol]).to_owned());
    });

    let cell = model.value_at(args.row, args.col)?;
    print_cell(&cell)?;
    args.common.write_json(&Output {
        parameters: model.parameters().clone(),
        days,
        elevation,
        cell,
    })
}

fn main() -> ExitCode {
    let grader = cli::is_grader_invocation();
    let args = Args::parse();
    args.common.init_logging();

    if grader {
        cli::report(run_grader())
    } else {
        cli::report(run(&args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_override_parameters() {
        let args = Args::try_parse_from([
            "shallow", "-n", "10", "-N", "200", "-a", "200", "-H", "-r", "plusminus", "-g", "easy",
            "-w", "Uniform",
        ])
        .unwrap();
        let mut parameters = ShallowWaterParameters::default();
        args.apply(&mut parameters);

        assert_eq!(parameters.ncol, 10);
        assert_eq!(parameters.nrow, 10);
        assert_eq!(parameters.n_slices, 200);
        assert_eq!(parameters.steps_per_slice, 200);
        assert!(parameters.horizontal_wrap);
        assert_eq!(parameters.rotation_scheme, RotationScheme::PlusMinus);
        assert_eq!(parameters.coriolis, CoriolisAlgorithm::Easy);
        assert_eq!(parameters.wind_scheme, WindScheme::Uniform);
        assert_eq!(parameters.initial_perturbation, Perturbation::None);
    }

    #[test]
    fn test_unknown_scheme_is_rejected() {
        assert!(Args::try_parse_from(["shallow", "-r", "sideways"]).is_err());
    }
}
