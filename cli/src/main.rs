use clap::Command;
use mkpark::Direction;

fn main() -> anyhow::Result<()> {
    mkpark::init_tracing();

    let cli = Command::new("mkpark")
        .version(mkpark_plan::VERSION)
        .about("Print mv commands that park or restore the emulator Android.mk files")
        .arg_required_else_help(false)
        .subcommand(
            Command::new("park")
                .about("Rename Android.mk files out of the build (the default)"),
        )
        .subcommand(
            Command::new("restore")
                .about("Rename parked Prasdroid.mk files back into the build"),
        );

    let matches = cli.get_matches();

    // Bare invocation behaves exactly like `park`.
    let direction = match matches.subcommand() {
        Some(("restore", _)) => Direction::Restore,
        _ => Direction::Park,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    mkpark::emit(direction, &mut out)?;

    Ok(())
}
