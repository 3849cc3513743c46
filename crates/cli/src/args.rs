use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use deformspec_core::SensorFieldsText;
use deformspec_engine::ScalarField;

/// View and edit deformation sensor blocks
#[derive(Parser, Debug)]
#[command(name = "deformspec", version, about)]
pub struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the sensor records of a file
    Show {
        file: PathBuf,
        /// Only this sensor index
        #[arg(long)]
        sensor: Option<usize>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Change fields of one sensor; omitted fields keep their value
    Set {
        file: PathBuf,
        #[arg(long)]
        sensor: usize,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Multiply a float field of one or all sensors in a file
    Scale {
        file: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        factor: String,
        /// Only this sensor index
        #[arg(long)]
        sensor: Option<usize>,
        #[arg(long, value_enum, default_value_t = FieldArg::Direction)]
        field: FieldArg,
    },
    /// List spec files below a folder
    Find { root: PathBuf },
    /// Multiply a float field in every spec file below a folder
    BatchScale {
        root: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        factor: String,
        #[arg(long, value_enum, default_value_t = FieldArg::Direction)]
        field: FieldArg,
    },
    /// Print the sensor position names
    Names,
}

/// Editable fields as raw text
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Six comma-separated floats
    #[arg(long, allow_hyphen_values = true)]
    pub direction: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub radius: Option<String>,
    /// Six comma-separated sensor indices
    #[arg(long)]
    pub next_sensor: Option<String>,
    #[arg(long)]
    pub scene_index: Option<String>,
    #[arg(long)]
    pub absorption: Option<String>,
    /// Two comma-separated sensor indices
    #[arg(long)]
    pub boundary: Option<String>,
}

impl From<FieldArgs> for SensorFieldsText {
    fn from(args: FieldArgs) -> Self {
        SensorFieldsText {
            direction_params: args.direction,
            radius: args.radius,
            next_sensor: args.next_sensor,
            scene_index: args.scene_index,
            absorption_level: args.absorption,
            next_boundary_sensor: args.boundary,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldArg {
    Direction,
    Radius,
}

impl From<FieldArg> for ScalarField {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Direction => ScalarField::DirectionParams,
            FieldArg::Radius => ScalarField::Radius,
        }
    }
}
