#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PowerAction {
    Halt,
    Shutdown,
    Reboot,
}

/// Machine power control. None of these return to the caller.
pub trait Power {
    fn halt(&self) -> !;

    fn shutdown(&self) -> !;

    fn reboot(&self) -> !;

    fn perform(&self, action: PowerAction) -> ! {
        match action {
            PowerAction::Halt => self.halt(),
            PowerAction::Shutdown => self.shutdown(),
            PowerAction::Reboot => self.reboot(),
        }
    }
}
