use core::fmt;
use std::io::{self, Stderr, Write};

use lazy_static::lazy_static;
use log::{LevelFilter, Log, Metadata, Record};
use spin::Mutex;

lazy_static! {
    pub static ref SERIAL: Mutex<SerialLine<Stderr>> = Mutex::new(SerialLine::new(io::stderr()));
}

static LOGGER: SerialLogger = SerialLogger;

/// Debug channel of the machine. On a hosted build the "serial port" is
/// stderr, which keeps it apart from the console on stdout.
pub struct SerialLine<W: Write> {
    port: W,
}

impl<W: Write> SerialLine<W> {
    pub fn new(port: W) -> Self {
        Self { port }
    }
}

impl<W: Write> fmt::Write for SerialLine<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.port.write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

pub struct SerialLogger;

impl Log for SerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        use core::fmt::Write;
        let mut serial = SERIAL.lock();
        // Nothing sensible is left to report to if the debug channel fails.
        let _ = writeln!(
            serial,
            "[{:<5} {}] {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = SERIAL.lock().port.flush();
    }
}

/// Installs the serial logger. Only the first call has an effect.
pub fn init_logger(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
