// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! `lintra` diagnostic CLI.
//!
//! Parses numbers from the command line, runs one library operation in the
//! selected precision and prints the result as JSON on stdout.
//!
//! Invariants:
//! - stdout carries only the JSON document; logs go to stderr.
//! - Degenerate input (singular matrix, zero quaternion) is not an error; the
//!   `NaN`/`±∞` it produces is printed as JSON `null`.

use anyhow::{anyhow, bail, Context, Result};
use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand, ValueEnum};
use lintra::{Angle, Mat3, Mat4, Quat, RotationOrder, Scalar, Vec3, Vec4};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lintra",
    version,
    about = "Linear-algebra diagnostics; every command prints JSON"
)]
struct Cli {
    /// Floating-point precision used for every computation.
    #[arg(
        long,
        global = true,
        value_enum,
        env = "LINTRA_PRECISION",
        default_value_t = Precision::Double
    )]
    precision: Precision,

    /// Raise log verbosity (`-v` info, `-vv` debug). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Precision {
    /// `f32`, epsilon 1e-6.
    Single,
    /// `f64`, epsilon 1e-12.
    Double,
}

#[derive(Subcommand)]
enum Commands {
    /// Invert a 3×3 or 4×4 matrix given as 9 or 16 row-major numbers.
    Invert(InvertArgs),
    /// Split a 4×4 translation-rotation-scale matrix into its parts.
    Decompose(DecomposeArgs),
    /// Interpolate between two rotations (slerp unless `--linear`).
    Interpolate(InterpolateArgs),
    /// Extract Euler angles, in degrees, from a quaternion.
    Euler(EulerArgs),
    /// Fold an angle given in degrees into a canonical range.
    NormalizeAngle(NormalizeAngleArgs),
    /// Project a point and report clip and normalized device coordinates.
    Project(ProjectArgs),
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::Invert(_) => "invert",
            Self::Decompose(_) => "decompose",
            Self::Interpolate(_) => "interpolate",
            Self::Euler(_) => "euler",
            Self::NormalizeAngle(_) => "normalize-angle",
            Self::Project(_) => "project",
        }
    }
}

#[derive(Args)]
struct InvertArgs {
    /// Matrix elements, row by row.
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    values: Vec<f64>,

    /// Rigid-transform inverse: transpose the rotation, negate the translation.
    /// Wrong for matrices with scale, shear or projection.
    #[arg(long)]
    fast: bool,
}

#[derive(Args)]
struct DecomposeArgs {
    /// Sixteen matrix elements, row by row.
    #[arg(required = true, num_args = 16, allow_negative_numbers = true)]
    values: Vec<f64>,
}

#[derive(Args)]
struct InterpolateArgs {
    /// Start rotation as `w,x,y,z`.
    #[arg(long, allow_hyphen_values = true)]
    from: String,

    /// End rotation as `w,x,y,z`.
    #[arg(long, allow_hyphen_values = true)]
    to: String,

    /// Interpolation parameter: 0 yields `--from`, 1 yields `--to`.
    #[arg(long, allow_negative_numbers = true)]
    t: f64,

    /// Blend components and renormalise instead of following the arc.
    #[arg(long)]
    linear: bool,
}

#[derive(Args)]
struct EulerArgs {
    /// Rotation as `w,x,y,z`.
    #[arg(long, allow_hyphen_values = true)]
    quat: String,

    /// Rotation order, e.g. `global-xyz` or `local-zyx`.
    #[arg(long, default_value = "global-xyz")]
    order: String,
}

#[derive(Args)]
struct NormalizeAngleArgs {
    /// Angle in degrees.
    #[arg(allow_negative_numbers = true)]
    degrees: f64,

    /// Target range.
    #[arg(long, value_enum, default_value_t = AngleMode::Signed)]
    mode: AngleMode,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum AngleMode {
    /// `[-180°, 180°]`
    Signed,
    /// `[0°, 360°)`
    Pos,
    /// `(-360°, 0°]`
    Neg,
}

#[derive(Args)]
#[command(group(
    ArgGroup::new("projection")
        .required(true)
        .args(["ortho", "perspective"])
))]
struct ProjectArgs {
    /// Orthographic box as `left,right,bottom,top,near,far`.
    #[arg(long, allow_hyphen_values = true)]
    ortho: Option<String>,

    /// Perspective frustum as `left,right,bottom,top,near,far`.
    #[arg(long, allow_hyphen_values = true)]
    perspective: Option<String>,

    /// Point to project as `x,y,z` (w = 1).
    #[arg(long, allow_hyphen_values = true)]
    point: String,
}

#[derive(Serialize)]
struct Decomposition<T: Scalar> {
    translation: Vec3<T>,
    rotation: Quat<T>,
    scale: Vec3<T>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    info!(precision = ?cli.precision, command = cli.command.name(), "running");
    let output = match cli.precision {
        Precision::Single => run::<f32>(&cli.command),
        Precision::Double => run::<f64>(&cli.command),
    }
    .with_context(|| format!("{} failed", cli.command.name()))?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn init_tracing(verbose: u8) -> Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("build log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn run<T: Scalar + Serialize>(command: &Commands) -> Result<Value> {
    match command {
        Commands::Invert(args) => invert::<T>(args),
        Commands::Decompose(args) => decompose::<T>(args),
        Commands::Interpolate(args) => interpolate::<T>(args),
        Commands::Euler(args) => euler::<T>(args),
        Commands::NormalizeAngle(args) => Ok(normalize_angle::<T>(args)),
        Commands::Project(args) => project::<T>(args),
    }
}

fn invert<T: Scalar + Serialize>(args: &InvertArgs) -> Result<Value> {
    let values: Vec<T> = args.values.iter().copied().map(T::from_f64).collect();
    let (inverse, singular) = match values.len() {
        9 => {
            let m = Mat3::<T>::try_from_row_major_slice(&values).context("read 3×3 matrix")?;
            let inv = if args.fast { m.fast_inverse() } else { m.inverse() };
            (serde_json::to_value(inv.row_major_array())?, inv.is_nan() || inv.is_inf())
        }
        16 => {
            let m = Mat4::<T>::try_from_row_major_slice(&values).context("read 4×4 matrix")?;
            let inv = if args.fast { m.fast_inverse() } else { m.inverse() };
            (serde_json::to_value(inv.row_major_array())?, inv.is_nan() || inv.is_inf())
        }
        n => bail!("expected 9 or 16 matrix elements, got {n}"),
    };
    if singular {
        warn!("matrix is singular; the inverse is not finite");
    }
    debug!(elements = values.len(), fast = args.fast, singular, "inverted");
    Ok(json!({ "inverse": inverse, "singular": singular }))
}

fn decompose<T: Scalar + Serialize>(args: &DecomposeArgs) -> Result<Value> {
    let values: Vec<T> = args.values.iter().copied().map(T::from_f64).collect();
    let m = Mat4::<T>::try_from_row_major_slice(&values).context("read 4×4 matrix")?;
    let (translation, rotation, scale) = m.to_trs();
    debug!(%translation, %rotation, %scale, "decomposed");
    Ok(serde_json::to_value(Decomposition {
        translation,
        rotation,
        scale,
    })?)
}

fn interpolate<T: Scalar + Serialize>(args: &InterpolateArgs) -> Result<Value> {
    let from = Quat::from(parse_list::<T, 4>(&args.from, "--from")?);
    let to = Quat::from(parse_list::<T, 4>(&args.to, "--to")?);
    let t = T::from_f64(args.t);
    let (method, result) = if args.linear {
        ("lerp", Quat::lerp(from, to, t))
    } else {
        ("slerp", Quat::slerp(from, to, t))
    };
    debug!(method, %result, "interpolated");
    Ok(json!({ "method": method, "result": result }))
}

fn euler<T: Scalar + Serialize>(args: &EulerArgs) -> Result<Value> {
    let q = Quat::from(parse_list::<T, 4>(&args.quat, "--quat")?);
    let order: RotationOrder = args
        .order
        .parse()
        .with_context(|| format!("parse --order {:?}", args.order))?;
    let (x, y, z) = q.euler_angles(order);
    debug!(%order, %x, %y, %z, "extracted euler angles");
    Ok(json!({
        "order": order.to_string(),
        "degrees": { "x": x.degrees(), "y": y.degrees(), "z": z.degrees() },
    }))
}

fn normalize_angle<T: Scalar + Serialize>(args: &NormalizeAngleArgs) -> Value {
    let angle = Angle::from_degrees(T::from_f64(args.degrees));
    let folded = match args.mode {
        AngleMode::Signed => angle.normalize(),
        AngleMode::Pos => angle.normalize_pos(),
        AngleMode::Neg => angle.normalize_neg(),
    };
    debug!(mode = ?args.mode, %angle, %folded, "normalized");
    json!({ "degrees": folded.degrees(), "radians": folded.radians() })
}

fn project<T: Scalar + Serialize>(args: &ProjectArgs) -> Result<Value> {
    let [px, py, pz] = parse_list::<T, 3>(&args.point, "--point")?;
    let matrix = match (&args.ortho, &args.perspective) {
        (Some(raw), None) => {
            let [left, right, bottom, top, near, far] = parse_list::<T, 6>(raw, "--ortho")?;
            Mat4::ortho(left, right, top, bottom, near, far)
        }
        (None, Some(raw)) => {
            let [left, right, bottom, top, near, far] =
                parse_list::<T, 6>(raw, "--perspective")?;
            Mat4::perspective(left, right, bottom, top, near, far)
        }
        _ => bail!("pass exactly one of --ortho or --perspective"),
    };
    let clip = matrix * Vec4::new(px, py, pz, T::ONE);
    let ndc = (clip / clip.w).xyz();
    debug!(%clip, %ndc, "projected");
    Ok(json!({ "clip": clip, "ndc": ndc }))
}

/// Parses exactly `N` comma-separated numbers.
fn parse_list<T: Scalar, const N: usize>(raw: &str, flag: &str) -> Result<[T; N]> {
    let values = raw
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map(T::from_f64)
                .with_context(|| format!("{flag}: invalid number {part:?}"))
        })
        .collect::<Result<Vec<T>>>()?;
    let count = values.len();
    values
        .try_into()
        .map_err(|_| anyhow!("{flag}: expected {N} comma-separated numbers, got {count}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_reads_exact_count() {
        let parsed = parse_list::<f64, 3>(" 1, -2.5 ,3e2", "--point").ok();
        assert_eq!(parsed, Some([1.0, -2.5, 300.0]));
    }

    #[test]
    fn parse_list_rejects_wrong_count_and_garbage() {
        let short = parse_list::<f64, 4>("1,2,3", "--quat").map_err(|e| e.to_string());
        assert_eq!(
            short,
            Err("--quat: expected 4 comma-separated numbers, got 3".to_owned())
        );
        assert!(parse_list::<f32, 2>("1,x", "--point").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
