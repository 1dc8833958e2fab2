use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    process::ExitCode,
};

use color_print::cprintln;
use x86asm::{assemble, error::Error, Assembly};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Source file
    #[clap(default_value = "program.asm")]
    input: String,

    /// Listing file
    #[clap(short, long, default_value = "output.txt")]
    listing: String,

    /// Object file
    #[clap(short, long, default_value = "program.obj")]
    output: String,

    /// Diagnostics file, written only when there is something to report
    #[clap(short, long, default_value = "errors.txt")]
    errors: String,

    /// Write the object as raw bytes instead of hex lines
    #[clap(short, long)]
    binary: bool,

    /// Export the symbol table as YAML
    #[clap(short, long)]
    symbols: Option<String>,

    /// Dump the listing to stdout
    #[clap(short, long)]
    dump: bool,
}

fn main() -> ExitCode {
    use clap::Parser;

    let args = Args::parse();
    println!("x86 Subset Assembler");

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            cprintln!("<red,bold>error</>: {}", err);
            for cause in err.causes() {
                cprintln!("  <blue>caused by</>: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}

/// Returns `false` when the source had errors.
fn run(args: &Args) -> Result<bool, Error> {
    println!("1. Read Source");
    println!("  < {}", args.input);
    let source = read_lines(&args.input)?;

    println!("2. Assign Addresses & Generate Code");
    let asm = assemble(&source);
    for diag in &asm.diags {
        let raw = source.get(diag.line - 1).map(String::as_str).unwrap_or("");
        diag.print(&args.input, raw);
    }
    println!("  - {} lines, {} bytes", asm.lines.len(), asm.object().len());
    if !asm.labels.is_empty() {
        println!("  - found #{} labels", asm.labels.len());
    }

    println!("3. Write Output");
    write_listing(&asm, &args.listing)?;
    write_object(&asm, &args.output, args.binary)?;
    if !asm.diags.is_empty() {
        write_lines(&args.errors, &asm.messages())?;
    }
    if let Some(path) = &args.symbols {
        let yaml = asm.labels.to_yaml()?;
        println!("  > {}", path);
        let mut file = create(path)?;
        file.write_all(yaml.as_bytes())
            .map_err(|e| Error::FileWrite(path.clone(), e))?;
    }

    if args.dump {
        println!("-------+------+----------+------------------+-----------------------------");
        for line in &asm.lines {
            println!("{}", line.cformat());
        }
        println!("-------+------+----------+------------------+-----------------------------");
    }

    Ok(!asm.has_error())
}

fn read_lines(path: &str) -> Result<Vec<String>, Error> {
    let file = File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(Error::FileRead)
}

fn create(path: &str) -> Result<File, Error> {
    File::create(path).map_err(|e| Error::FileCreate(path.to_string(), e))
}

fn write_lines(path: &str, lines: &[String]) -> Result<(), Error> {
    println!("  > {}", path);
    let mut file = create(path)?;
    for line in lines {
        writeln!(file, "{}", line).map_err(|e| Error::FileWrite(path.to_string(), e))?;
    }
    Ok(())
}

fn write_listing(asm: &Assembly, path: &str) -> Result<(), Error> {
    write_lines(path, &asm.listing())
}

fn write_object(asm: &Assembly, path: &str, binary: bool) -> Result<(), Error> {
    if binary {
        println!("  > {}", path);
        let mut file = create(path)?;
        file.write_all(&asm.object())
            .map_err(|e| Error::FileWrite(path.to_string(), e))
    } else {
        write_lines(path, &asm.object_hex())
    }
}
