use log::{info, LevelFilter};
use nerdos_shell::{Session, ShellConfig};
use nerdos_std::power::Power;
use nerdos_std::ramfs::RamFs;

use crate::console::TerminalConsole;
use crate::power::HostPower;

mod console;
mod power;
mod serial;

const LOG_LEVEL: LevelFilter = LevelFilter::Warn;

fn main() {
    kernel_main()
}

fn kernel_main() -> ! {
    serial::init_logger(LOG_LEVEL);

    let fs = RamFs::new();
    info!("vfs: registered volume {}", fs.volume());

    let config = ShellConfig::default();
    let mut console = TerminalConsole::stdio();
    let action = Session::new(&mut console, &fs, &config).run();

    HostPower.perform(action)
}
