use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use vpip_core::{settings, Coordinate, Kinematics, PlotterConfig, PolarCoordinate};

#[derive(Parser)]
#[command(name = "vpip", about = "Polargraph plotter configuration and coordinate tools", version)]
struct Cli {
    /// Settings file, defaults to ~/.vpip/config.json
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every configured and derived parameter
    Show,

    /// Write the default settings file, replacing any existing one
    Init,

    #[command(flatten)]
    Convert(Conversion),
}

#[derive(Subcommand)]
enum Conversion {
    /// Convert a machine position (mm) into cord lengths
    ToPolar {
        x: f64,
        y: f64,
        #[arg(long)]
        pen_up: bool,
    },

    /// Convert cord lengths into a machine position (mm)
    ToSystem {
        left: f64,
        right: f64,
        #[arg(long)]
        pen_up: bool,
    },

    /// Convert a machine position (mm) into drawing pixels
    ToDrawing { x: f64, y: f64 },

    /// Convert drawing pixels into a machine position (mm)
    FromDrawing { x: f64, y: f64 },

    /// Convert drawing pixels into preview pixels
    ToScreen { x: f64, y: f64 },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let path = match cli.config {
        Some(path) => path,
        None => settings::default_path()?,
    };

    match cli.command {
        Commands::Init => {
            let written = settings::write_defaults(&path)?;
            println!("Default settings written to {}", written.display());
        }
        Commands::Show => println!("{}", PlotterConfig::load_from(&path)?),
        Commands::Convert(conversion) => {
            let config = PlotterConfig::load_from(&path)?;
            println!("{}", convert(config.kinematics(), conversion)?);
        }
    }

    Ok(())
}

fn convert(kinematics: &Kinematics, conversion: Conversion) -> Result<String> {
    let converted = match conversion {
        Conversion::ToPolar { x, y, pen_up } => kinematics.system_to_polar(&Coordinate::new(x, y, pen_up)).to_string(),
        Conversion::ToSystem { left, right, pen_up } => {
            kinematics.polar_to_system(&PolarCoordinate::new(left, right, pen_up))?.to_string()
        }
        Conversion::ToDrawing { x, y } => kinematics.system_to_drawing(&Coordinate::new(x, y, false)).to_string(),
        Conversion::FromDrawing { x, y } => kinematics.drawing_to_system(&Coordinate::new(x, y, false)).to_string(),
        Conversion::ToScreen { x, y } => kinematics.drawing_to_screen(&Coordinate::new(x, y, false)).to_string(),
    };

    Ok(converted)
}


#[cfg(test)]
mod tests {
    use super::*;
    use vpip_core::Parameters;

    fn kinematics() -> Kinematics {
        let mut params = Parameters::default();
        params.machine.set_machine_width(1000);
        params.paper.set_width(210).set_height(297).set_pos_x(300).set_pos_y(400).set_margin(5).set_pixels(800);
        params.screen.set_screen_x(400);
        Kinematics::new(params).unwrap()
    }

    #[test]
    fn conversions_parse_as_top_level_subcommands() {
        let cli = Cli::try_parse_from(["vpip", "from-drawing", "40", "80", "--config", "config.json"]).unwrap();
        assert!(matches!(cli.command, Commands::Convert(Conversion::FromDrawing { x, y }) if x == 40. && y == 80.));
        assert_eq!(cli.config, Some(PathBuf::from("config.json")));

        assert!(matches!(Cli::try_parse_from(["vpip", "show"]).unwrap().command, Commands::Show));
        assert!(matches!(Cli::try_parse_from(["vpip", "init"]).unwrap().command, Commands::Init));
    }

    #[test]
    fn from_drawing_converts_to_system() {
        let converted = convert(&kinematics(), Conversion::FromDrawing { x: 40., y: 80. }).unwrap();
        assert_eq!(converted, Coordinate::new(315., 425., false).to_string());
    }

    #[test]
    fn unreachable_cords_are_an_error() {
        assert!(convert(&kinematics(), Conversion::ToSystem { left: 2000., right: 100., pen_up: false }).is_err());
    }
}
