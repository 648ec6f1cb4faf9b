use std::io::{self, Write};
use std::process;

use log::info;
use nerdos_std::power::Power;

/// Exit status that asks whoever launched the machine to start it again.
pub const REBOOT_EXIT_CODE: i32 = 3;

/// Power control for a machine hosted inside an ordinary process.
pub struct HostPower;

impl HostPower {
    fn power_off(&self, reason: &str, code: i32) -> ! {
        info!("power: {}", reason);
        log::logger().flush();
        let _ = io::stdout().flush();
        process::exit(code)
    }
}

impl Power for HostPower {
    fn halt(&self) -> ! {
        self.power_off("cpu halted", 0)
    }

    fn shutdown(&self) -> ! {
        self.power_off("shutting down", 0)
    }

    fn reboot(&self) -> ! {
        self.power_off("rebooting", REBOOT_EXIT_CODE)
    }
}
