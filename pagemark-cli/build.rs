use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command tree from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("pagemark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Recover Markdown from block-editor pages and drive image generation")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a pagemark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("extract")
                .about("Extract Markdown from a block-editor HTML page")
                .arg(
                    Arg::new("input")
                        .help("HTML file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from-block")
                        .long("from-block")
                        .value_name("ID")
                        .help("First block id of the range to extract"),
                )
                .arg(
                    Arg::new("to-block")
                        .long("to-block")
                        .value_name("ID")
                        .help("Last block id of the range to extract"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Report per-block classification and formatting as JSON")
                .arg(
                    Arg::new("input")
                        .help("HTML file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from-block")
                        .long("from-block")
                        .value_name("ID")
                        .help("First block id of the range to inspect"),
                )
                .arg(
                    Arg::new("to-block")
                        .long("to-block")
                        .value_name("ID")
                        .help("Last block id of the range to inspect"),
                ),
        )
        .subcommand(
            Command::new("reconstruct")
                .about("Recover Markdown structure from plain text")
                .arg(
                    Arg::new("input")
                        .help("Text file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("presets")
                .about("List configured style presets")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Emit the presets as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("prompt")
                .about("Compose the image-generation prompt for a page")
                .arg(
                    Arg::new("input")
                        .help("Input file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("preset")
                        .long("preset")
                        .value_name("NAME")
                        .help("Use a configured preset's style text"),
                )
                .arg(
                    Arg::new("style")
                        .long("style")
                        .value_name("TEXT")
                        .help("Use a custom style text"),
                )
                .arg(
                    Arg::new("as-is")
                        .long("as-is")
                        .help("Use the content as the prompt, without style framing")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .value_name("KIND")
                        .help("Input kind: html or text (auto-detected from the extension)"),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate an image from a page via the configured model")
                .arg(
                    Arg::new("input")
                        .help("Input file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("preset")
                        .long("preset")
                        .value_name("NAME")
                        .help("Use a configured preset's style text"),
                )
                .arg(
                    Arg::new("style")
                        .long("style")
                        .value_name("TEXT")
                        .help("Use a custom style text"),
                )
                .arg(
                    Arg::new("as-is")
                        .long("as-is")
                        .help("Use the content as the prompt, without style framing")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .value_name("KIND")
                        .help("Input kind: html or text (auto-detected from the extension)"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Decode the image and write it here (inline results only)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("append")
                .about("Append an image block to a document page")
                .arg(
                    Arg::new("page")
                        .long("page")
                        .value_name("ID")
                        .required(true)
                        .help("Parent page or block id"),
                )
                .arg(
                    Arg::new("after")
                        .long("after")
                        .value_name("BLOCK")
                        .help("Insert after this block id"),
                )
                .arg(
                    Arg::new("image-url")
                        .long("image-url")
                        .value_name("URL")
                        .required(true)
                        .help("Externally hosted image URL")
                        .value_hint(ValueHint::Url),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "pagemark", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "pagemark", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "pagemark", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
