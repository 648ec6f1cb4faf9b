use nerdos_shell::{Session, ShellConfig};
use nerdos_std::fs::FileSystem;
use nerdos_std::io::BufferConsole;
use nerdos_std::power::PowerAction;
use nerdos_std::ramfs::RamFs;

const LOGIN: [&str; 2] = ["user", "password"];

fn boot(fs: &RamFs, lines: &[&str]) -> (PowerAction, BufferConsole) {
    let config = ShellConfig::default();
    let mut console = BufferConsole::new(lines.iter().copied());
    let action = Session::new(&mut console, fs, &config).run();

    (action, console)
}

fn with_login(commands: &[&'static str]) -> Vec<&'static str> {
    LOGIN.iter().chain(commands.iter()).copied().collect()
}

#[test]
fn failed_logins_halt_before_the_prompt() {
    let fs = RamFs::new();
    let (action, console) = boot(&fs, &["a", "b", "c", "d", "e", "f", "mkdir x"]);

    assert_eq!(action, PowerAction::Halt);
    assert!(console
        .output()
        .ends_with("Error: Invalid credentials.\nToo many failed attempts. System halted.\n"));
    assert!(!console.output().contains("Welcome to NerdOS"));
    assert_eq!(console.clears(), 0);
    assert_eq!(console.pending_input(), 1);
    assert!(!fs.directory_exists("0:\\x"));
}

#[test]
fn login_on_last_attempt_opens_the_shell() {
    let fs = RamFs::new();
    let (action, console) = boot(&fs, &["a", "b", "c", "d", "user", "password", "shutdown"]);

    assert_eq!(action, PowerAction::Shutdown);
    assert!(console.output().contains("Login successful!\n"));
    assert!(console.output().contains("Welcome to NerdOS v1.0!\n"));
    assert_eq!(console.clears(), 1);
}

#[test]
fn banner_then_prompt_with_working_directory() {
    let fs = RamFs::new();
    let (_, console) = boot(&fs, &with_login(&["exit"]));

    let output = console.output();
    let banner = output.find("Type 'help' for a list of commands.").unwrap();
    let prompt = output.find("\n0:\\> ").unwrap();
    assert!(banner < prompt);
    assert!(output.ends_with("0:\\> System halted.\n"));
}

#[test]
fn file_workflow_across_directories() {
    let fs = RamFs::new();
    let (action, console) = boot(
        &fs,
        &with_login(&[
            "mkdir docs",
            "cd docs",
            "write notes.txt hello there",
            "read notes.txt",
            "cd ..",
            "ls",
            "restart",
        ]),
    );

    assert_eq!(action, PowerAction::Reboot);
    let output = console.output();
    assert!(output.contains("Now in: 0:\\docs\n"));
    assert!(output.contains("\n0:\\docs> "));
    assert!(output.contains("hello there\n"));
    assert!(output.contains("Directories:\n  [D] docs\nFiles:\n"));
    assert_eq!(
        fs.read_to_string("0:\\docs\\notes.txt").unwrap(),
        "hello there"
    );
}

#[test]
fn edit_reads_from_the_same_console() {
    let fs = RamFs::new();
    let (_, console) = boot(
        &fs,
        &with_login(&["edit poem.txt", "roses", "", "violets", "__END__", "read poem.txt", "exit"]),
    );

    assert_eq!(fs.read_to_string("0:\\poem.txt").unwrap(), "roses\n\nviolets\n");
    assert!(console.output().contains("File saved.\n"));
    assert_eq!(console.pending_input(), 0);
}

#[test]
fn errors_never_end_the_session() {
    let fs = RamFs::new();
    let (action, console) = boot(
        &fs,
        &with_login(&[
            "div 1 0",
            "nonsense",
            "read ghost.txt",
            "write nowhere/f.txt x",
            "rmdir ghost",
            "",
            "add 40 2",
            "shutdown",
        ]),
    );

    assert_eq!(action, PowerAction::Shutdown);
    let output = console.output();
    assert!(output.contains("Error: Divide by zero\n"));
    assert!(output.contains("Error: Unknown command. Type 'help'.\n"));
    assert!(output.contains("Error: File not found.\n"));
    assert!(output.contains("Error: Exception: "));
    assert!(output.contains("Error: Directory not found.\n"));
    assert!(output.contains("Result: 42\n"));
}

#[test]
fn clear_command_clears_the_console() {
    let fs = RamFs::new();
    let (_, console) = boot(&fs, &with_login(&["clear", "CLEAR", "exit"]));

    assert_eq!(console.clears(), 3);
}

#[test]
fn closed_input_halts() {
    let fs = RamFs::new();
    let (action, _) = boot(&fs, &with_login(&["mkdir kept"]));

    assert_eq!(action, PowerAction::Halt);
    assert!(fs.directory_exists("0:\\kept"));
}

#[test]
fn custom_credentials() {
    let fs = RamFs::new();
    let config = ShellConfig {
        username: String::from("root"),
        password: String::from("toor"),
        ..ShellConfig::default()
    };
    let mut console = BufferConsole::new(["user", "password", "root", "toor", "exit"]);
    let action = Session::new(&mut console, &fs, &config).run();

    assert_eq!(action, PowerAction::Halt);
    assert_eq!(console.output().matches("Invalid credentials").count(), 1);
    assert!(console.output().contains("System halted.\n"));
}
