use mysh::flags::Flags;
use mysh::shell::Shell;
use std::env;

fn main() -> Result<(), mysh::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("mysh {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    mysh::logging::init(flags.is_set("debug"));

    let code = match flags.get_value("command") {
        Some(line) => Shell::run_command(line)?,
        None => Shell::new(&flags)?.run()?,
    };
    std::process::exit(code)
}
