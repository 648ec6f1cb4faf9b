use nerdos_std::io::{Color, Console};

const RULE: &'static str =
    "==================================================================";

const LOGO: [&'static str; 9] = [
    r"$$\   $$\                           $$\        $$$$$$\   $$$$$$\  ",
    r"$$$\  $$ |                          $$ |      $$  __$$\ $$  __$$\ ",
    r"$$$$\ $$ | $$$$$$\   $$$$$$\   $$$$$$$ |      $$ /  $$ |$$ /  \__|",
    r"$$ $$\$$ |$$  __$$\ $$  __$$\ $$  __$$ |      $$ |  $$ |\$$$$$$\  ",
    r"$$ \$$$$ |$$$$$$$$ |$$ |  \__|$$ /  $$ |      $$ |  $$ | \____$$\ ",
    r"$$ |\$$$ |$$   ____|$$ |      $$ |  $$ |      $$ |  $$ |$$\   $$ |",
    r"$$ | \$$ |\$$$$$$$\ $$ |      \$$$$$$$ |       $$$$$$  |\$$$$$$  |",
    r"\__|  \__| \_______|\__|       \_______|$$$$$$\______/  \______/ ",
    "",
];

const ABOUT_RULE: &'static str = "=======================================================";

const ABOUT: [&'static str; 3] = [
    "NerdOS v1.0 by abradee",
    "",
    "Open sourced on his Github (https://github.com/Abradee)",
];

const HELP: [&'static str; 9] = [
    "  add/sub/mul/div [a] [b]",
    "  echo [text]     - print text",
    "  clear           - clear screen",
    "  ls              - list files/folders",
    "  mkdir/rmdir [name]",
    "  cd [folder]",
    "  write/read/delete [file]",
    "  edit [file]     - multiline text editor",
    "  about/help/exit/shutdown/restart",
];

/// Greeting shown right after a successful login.
pub fn print_banner(console: &mut dyn Console) {
    console.write_line_colored(RULE, Color::Cyan);
    for line in LOGO.iter() {
        console.write_line_colored(line, Color::Cyan);
    }
    console.write_line_colored("Welcome to NerdOS v1.0!", Color::Cyan);
    console.write_line_colored("Type 'help' for a list of commands.", Color::Yellow);
    console.write_line_colored(RULE, Color::Cyan);
}

pub fn print_about(console: &mut dyn Console) {
    console.write_line_colored(ABOUT_RULE, Color::Cyan);
    for line in ABOUT.iter() {
        console.write_line_colored(line, Color::Cyan);
    }
    console.write_line_colored(ABOUT_RULE, Color::Cyan);
}

pub fn print_help(console: &mut dyn Console) {
    console.write_line_colored("Available commands:", Color::Yellow);
    for line in HELP.iter() {
        console.write_line(line);
    }
}
