use std::io::{self, Write};

use clap::Parser as CParser;
use log::error;

use hanlang::Interpreter;

#[derive(CParser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// HanLang source file to run (.hanlang)
    #[arg(short, long)]
    file: std::path::PathBuf,
}

fn main() {
    simple_logger::init_with_level(log::Level::Warn).unwrap();
    let args = Cli::parse();

    let source = std::fs::read_to_string(&args.file).unwrap_or_else(|err| {
        error!("파일을 읽을 수 없습니다 '{}': {err}", args.file.to_string_lossy());
        std::process::exit(1);
    });

    let mut interpreter = Interpreter::new(
        |line: &str| println!("{line}"),
        |prompt: &str| {
            print!("{prompt}");
            io::stdout().flush().ok();
            let mut line = String::new();
            io::stdin().read_line(&mut line).ok();
            line.trim_end_matches(['\n', '\r']).to_owned()
        },
    );

    if let Err(err) = interpreter.run(&source) {
        error!("{err}");
        std::process::exit(1);
    }
}
