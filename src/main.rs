use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use clap::Parser;
use md2docx::{Error, StyleConfig};

#[derive(Parser)]
#[command(name = "md2docx")]
#[command(about = "Convert Markdown files to Word documents")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output Word document (defaults to input name with .docx extension)
    output: Option<PathBuf>,

    /// Do not open the file after creation
    #[arg(long)]
    no_show: bool,

    /// Style config file (defaults to config.json beside the executable)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overwrite an existing output file without asking
    #[arg(short, long)]
    yes: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension("docx"));

    if !cli.input.is_file() {
        eprintln!("Error: {}", Error::InputNotFound(cli.input.clone()));
        std::process::exit(1);
    }

    if output.exists() {
        if !cli.yes && !confirm_overwrite(&output) {
            println!("Operation cancelled.");
            return;
        }
        if fs::remove_file(&output).is_err() {
            eprintln!("Error: {}", Error::OutputLocked(output.clone()));
            eprintln!("Please close the file and try again.");
            std::process::exit(1);
        }
    }

    let config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                log::warn!("Config file {} not found, using defaults", path.display());
            }
            StyleConfig::load(path)
        }
        None => StyleConfig::resolve(),
    };

    match md2docx::convert_file(&cli.input, &output, &config) {
        Ok(()) => println!("Successfully created {}", output.display()),
        Err(e @ Error::FileInUse(_)) => {
            eprintln!("Error: {e}");
            eprintln!("Please close the file and try again.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error saving file: {e}");
            std::process::exit(1);
        }
    }

    if !cli.no_show {
        if let Err(e) = open_file(&output) {
            log::warn!("Could not open {}: {}", output.display(), e);
        }
    }
}

/// Ask before replacing an existing file. Anything but `y` declines.
fn confirm_overwrite(path: &Path) -> bool {
    print!("{} already exists. Delete and overwrite? (y/n): ", path.display());
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut response = String::new();
    match io::stdin().read_line(&mut response) {
        Ok(_) => response.trim().eq_ignore_ascii_case("y"),
        Err(_) => false,
    }
}

/// Hand the file to the platform's default viewer.
fn open_file(path: &Path) -> io::Result<()> {
    #[cfg(target_os = "windows")]
    let mut command = {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    };
    #[cfg(target_os = "macos")]
    let mut command = Command::new("open");
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let mut command = Command::new("xdg-open");

    command.arg(path).spawn().map(|_| ())
}
