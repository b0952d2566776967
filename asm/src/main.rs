use arch::optab::OpTable;
use color_print::cprintln;
use sicasm::{loader, parser, pass1, pass2, Diagnostic, Error};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "input.txt")]
    input: String,

    /// Operation table (`MNEMONIC CODE [LENGTH]` text, or YAML). Defaults to the SIC set
    #[clap(long)]
    optab: Option<String>,

    /// Object program file
    #[clap(short, long, default_value = "object_program.txt")]
    output: String,

    /// Listing file
    #[clap(short, long, default_value = "listing.txt")]
    listing: String,

    /// Intermediate file
    #[clap(long)]
    intermediate: Option<String>,

    /// Symbol table file
    #[clap(long)]
    symtab: Option<String>,

    /// Program length file
    #[clap(long)]
    length: Option<String>,

    /// Dump listing
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("SIC Assembler");

    match run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            cprintln!("<red,bold>error</>: {}", err);
            std::process::exit(1);
        }
    }
}

/// Returns whether the program assembled without diagnostics.
fn run(args: &Args) -> Result<bool, Error> {
    println!("1. Read Files and Parse Lines");
    println!("  < {}", args.input);
    let source = loader::read_lines(&args.input)?;
    let loaded;
    let optab = match &args.optab {
        Some(path) => {
            println!("  < {}", path);
            loaded = loader::load_optab(path)?;
            &loaded
        }
        None => OpTable::sic(),
    };

    let (lines, syntax_errors) = parser::parse_source(&source.join("\n"));

    println!("2. Assign Addresses & Collect Symbols");
    let first = pass1(&lines, optab)?;
    if let Some(path) = &args.intermediate {
        println!("  > {}", path);
        loader::write_file(path, &first.program.to_string())?;
    }
    if let Some(path) = &args.symtab {
        println!("  > {}", path);
        loader::write_file(path, &first.symbols.to_string())?;
    }
    if let Some(path) = &args.length {
        println!("  > {}", path);
        loader::write_file(path, &first.render_length())?;
    }

    println!("3. Resolve Symbols & Generate Object Program");
    let second = pass2(&first, optab);
    println!("  > {}", args.output);
    loader::write_file(&args.output, &second.render())?;
    println!("  > {}", args.listing);
    loader::write_file(&args.listing, &second.listing.to_string())?;

    if args.dump {
        second.listing.print_dump(&first.name, &first.symbols);
    }

    let diags: Vec<&Diagnostic> = syntax_errors
        .iter()
        .chain(&first.errors)
        .chain(&second.errors)
        .collect();
    for diag in &diags {
        diag.print_diag(&args.input, &source);
    }

    println!(
        "Program length: 0x{:X} ({} bytes), start 0x{:06X}",
        first.length, first.length, first.start
    );
    if diags.is_empty() {
        Ok(true)
    } else {
        cprintln!(
            "<red,bold>error</>: {} error(s), output is not executable",
            diags.len()
        );
        Ok(false)
    }
}
