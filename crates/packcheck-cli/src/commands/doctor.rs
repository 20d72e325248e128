//! `pkchk doctor`: check that the required external tools are installed.

use packcheck_build::pack::PackCli;
use packcheck_runtime::docker::DockerCli;

const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Executes the `doctor` command.
///
/// # Errors
///
/// Returns an error if any required tool is missing.
pub fn execute() -> anyhow::Result<()> {
    eprintln!();
    let mut missing = 0_u32;

    match PackCli::locate() {
        Ok(pack) => {
            eprintln!("  {GREEN}ok{RESET} {BOLD}pack{RESET}   {}", pack.binary().display());
        }
        Err(e) => {
            missing += 1;
            eprintln!("  {RED}missing{RESET} {BOLD}pack{RESET}   {e}");
        }
    }

    match DockerCli::locate() {
        Ok(docker) => {
            eprintln!("  {GREEN}ok{RESET} {BOLD}docker{RESET} {}", docker.binary().display());
        }
        Err(e) => {
            missing += 1;
            eprintln!("  {RED}missing{RESET} {BOLD}docker{RESET} {e}");
        }
    }

    eprintln!();
    if missing > 0 {
        return Err(anyhow::anyhow!("{missing} required tool(s) missing"));
    }
    eprintln!("  All required tools are available.");
    Ok(())
}
