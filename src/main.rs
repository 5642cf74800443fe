use std::io;

use clap::Parser;

use deskhop::cli::{Cli, GameConfig};
use deskhop::debug_log::{self, DebugLogHandle};
use deskhop::drivers::OutputDriver;
use deskhop::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use deskhop::runner::{GameApp, build_session, run_app};
use deskhop::tracing_sub;

fn main() -> io::Result<()> {
    let args = Cli::parse();
    let config = GameConfig::try_from(&args)
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;

    debug_log::set_global_debug_log(DebugLogHandle::new(debug_log::DEFAULT_MAX_LINES));
    debug_log::install_panic_hook();
    tracing_sub::init(config.log_file.as_deref())?;

    let session = build_session(&config)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;
    let mut app = GameApp::new(session, &config);

    let mut output = ConsoleOutputDriver::new()?;
    output.enter()?;
    let result = run_app(&mut app, ConsoleInputDriver::new(), &mut output, &config);
    output.exit()?;
    result
}
