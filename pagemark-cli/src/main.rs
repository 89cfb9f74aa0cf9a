// Command-line interface for pagemark
//
// This binary drives the Markdown recovery engine and the generate-and-append
// flow built on top of it.
//
// Extraction:
//
// A bare `pagemark <file>` runs the extract command, so the common case stays
// short. Extraction is total: the strategy cascade always produces some
// Markdown, falling back to plain-text pattern reconstruction when the page
// carries no recognizable structure.
// Usage:
//  pagemark <input> [-o <file>]                          - Extract (default)
//  pagemark extract <input> [--from-block ID --to-block ID] [-o <file>]
//  pagemark inspect <input> [--from-block ID --to-block ID]
//  pagemark reconstruct <input>                          - Plain text to Markdown
//
// Generation flow:
//
//  pagemark presets [--json]                             - List style presets
//  pagemark prompt <input> --preset <NAME>               - Compose the prompt
//  pagemark generate <input> --style <TEXT> [-o <file>]  - Call the image API
//  pagemark append --page <ID> --image-url <URL>         - Append to a page
//
// Extra Parameters:
//
// Configuration keys can be overridden with --extra-<key> [value]. The CLI
// layer strips the "extra-" prefix and applies the overrides after the
// configuration files are loaded.
// Example:
//  pagemark generate page.html --as-is --extra-model gemini-3-pro-image-preview

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use pagemark_client::{DocumentClient, GeneratedImage, ImageGenerationClient};
use pagemark_config::{Loader, PagemarkConfig};
use pagemark_core::{
    compose_prompt, inspect, reconstruct, Page, Preset, Selection, StrategyPipeline,
};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};

const SUBCOMMANDS: &[&str] = &[
    "extract",
    "inspect",
    "reconstruct",
    "presets",
    "prompt",
    "generate",
    "append",
    "help",
];

/// Parse extra-* arguments from the command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            // Found an extra-* argument
            // Check if the next arg is a value or another flag/end
            let has_value = if i + 1 < args.len() {
                !args[i + 1].starts_with('-')
            } else {
                false
            };

            if has_value {
                // Explicit value provided
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2; // Skip both the key and value
            } else {
                // No value, treat as boolean flag (default to "true")
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("pagemark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Recover Markdown from block-editor pages and drive image generation")
        .long_about(
            "pagemark is a command-line tool for recovering Markdown from\n\
            block-editor HTML and for the generate-and-append flow built on it.\n\n\
            Commands:\n  \
            - extract:     HTML page or fragment -> Markdown\n  \
            - inspect:     JSON report of the extraction (per-block roles)\n  \
            - reconstruct: plain text -> Markdown via pattern rules\n  \
            - presets:     list configured style presets\n  \
            - prompt:      compose the image-generation prompt\n  \
            - generate:    compose, call the generation API, save the image\n  \
            - append:      append a generated image to a document page\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration keys.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            pagemark page.html                      # Extract (default command)\n  \
            pagemark extract page.html -o out.md    # Extract to a file\n  \
            pagemark inspect page.html              # Per-block JSON report\n  \
            pagemark prompt page.html --preset モノトーン   # Compose a prompt",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
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
                .long_about(
                    "Extract Markdown from block-editor HTML.\n\n\
                    The extraction runs a cascade of strategies from the most\n\
                    structured (per-block scan) down to plain-text pattern\n\
                    reconstruction, so some Markdown always comes back.\n\n\
                    Examples:\n  \
                    pagemark extract page.html               # Whole page to stdout\n  \
                    pagemark extract - < page.html           # Read from stdin\n  \
                    pagemark extract page.html -o out.md     # Write to a file\n  \
                    pagemark extract page.html --from-block a --to-block b",
                )
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
                .long_about(
                    "Report the extraction as JSON: the winning strategy, the\n\
                    combined Markdown, and one entry per leaf block with its id,\n\
                    classified role, flattened text, and formatted line.\n\n\
                    Examples:\n  \
                    pagemark inspect page.html\n  \
                    pagemark inspect page.html --from-block a --to-block b",
                )
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
                .long_about(
                    "Apply the plain-text pattern rules to recover Markdown\n\
                    structure: numbered section headers, ordinals, bullet\n\
                    glyphs, key-value emphasis, and heading promotion.\n\n\
                    Examples:\n  \
                    pagemark reconstruct notes.txt\n  \
                    pagemark reconstruct - < notes.txt",
                )
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
                .long_about(
                    "Compose the prompt the generation API would receive.\n\n\
                    The content is the input's recovered Markdown. Choose the\n\
                    style with exactly one of:\n  \
                    --preset <NAME>   a configured preset\n  \
                    --style <TEXT>    free-form style text\n  \
                    --as-is           no style framing, content only\n\n\
                    Examples:\n  \
                    pagemark prompt page.html --preset モノトーン\n  \
                    pagemark prompt notes.txt --style '水彩画のタッチ'\n  \
                    pagemark prompt page.html --as-is",
                )
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
                        .help("Use a custom style text")
                        .conflicts_with("preset"),
                )
                .arg(
                    Arg::new("as-is")
                        .long("as-is")
                        .help("Use the content as the prompt, without style framing")
                        .action(ArgAction::SetTrue)
                        .conflicts_with_all(["preset", "style"]),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .value_name("KIND")
                        .help("Input kind (auto-detected from the extension if not given)")
                        .value_parser(clap::builder::PossibleValuesParser::new(["html", "text"])),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate an image from a page via the configured model")
                .long_about(
                    "Compose the prompt, call the image generation API, and\n\
                    deliver the result.\n\n\
                    Without -o the image source is printed: a data: URL for\n\
                    inline results, the file URI for remote ones. With -o the\n\
                    inline image bytes are decoded and written to the file.\n\n\
                    Examples:\n  \
                    pagemark generate page.html --preset カラフル・キャッチー\n  \
                    pagemark generate page.html --as-is -o banner.png",
                )
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
                        .help("Use a custom style text")
                        .conflicts_with("preset"),
                )
                .arg(
                    Arg::new("as-is")
                        .long("as-is")
                        .help("Use the content as the prompt, without style framing")
                        .action(ArgAction::SetTrue)
                        .conflicts_with_all(["preset", "style"]),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .value_name("KIND")
                        .help("Input kind (auto-detected from the extension if not given)")
                        .value_parser(clap::builder::PossibleValuesParser::new(["html", "text"])),
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
                .long_about(
                    "Append one externally hosted image as a new block under a\n\
                    page. The service only accepts URLs it can fetch, so the\n\
                    image must already be hosted somewhere.\n\n\
                    Examples:\n  \
                    pagemark append --page 1a2b3c --image-url https://img.example/banner.png\n  \
                    pagemark append --page 1a2b3c --after 9f8e7d --image-url https://img.example/banner.png",
                )
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
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "extract"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // First, try normal parsing with cleaned args
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the first arg looks like a file
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                // Inject "extract" as the subcommand
                let mut new_args = vec![cleaned_args[0].clone(), "extract".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                // Try parsing again with "extract" injected
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                // Not a case where we should inject extract, show original error
                e.exit();
            }
        }
    };

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    reject_unknown_overrides(&extra_params);

    match matches.subcommand() {
        Some(("extract", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from_block = sub_matches.get_one::<String>("from-block").map(|s| s.as_str());
            let to_block = sub_matches.get_one::<String>("to-block").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_extract_command(input, from_block, to_block, output);
        }
        Some(("inspect", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from_block = sub_matches.get_one::<String>("from-block").map(|s| s.as_str());
            let to_block = sub_matches.get_one::<String>("to-block").map(|s| s.as_str());
            handle_inspect_command(input, from_block, to_block);
        }
        Some(("reconstruct", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_reconstruct_command(input);
        }
        Some(("presets", sub_matches)) => {
            handle_presets_command(sub_matches.get_flag("json"), &config);
        }
        Some(("prompt", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let kind = input_kind(input, sub_matches.get_one::<String>("from").map(|s| s.as_str()));
            let style = resolve_style(sub_matches, &config);
            handle_prompt_command(input, kind, style.as_deref());
        }
        Some(("generate", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let kind = input_kind(input, sub_matches.get_one::<String>("from").map(|s| s.as_str()));
            let style = resolve_style(sub_matches, &config);
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_generate_command(input, kind, style.as_deref(), output, &config);
        }
        Some(("append", sub_matches)) => {
            let page = sub_matches
                .get_one::<String>("page")
                .expect("page is required");
            let after = sub_matches.get_one::<String>("after").map(|s| s.as_str());
            let image_url = sub_matches
                .get_one::<String>("image-url")
                .expect("image-url is required");
            handle_append_command(page, after, image_url, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the extract command
fn handle_extract_command(
    input: &str,
    from_block: Option<&str>,
    to_block: Option<&str>,
    output: Option<&str>,
) {
    let source = read_input(input);
    let page = parse_page(&source);
    let selection = selection_for(&page, from_block, to_block);
    let markdown = StrategyPipeline::with_defaults().extract(&page, &selection);
    write_output(output, &markdown);
}

/// Handle the inspect command
fn handle_inspect_command(input: &str, from_block: Option<&str>, to_block: Option<&str>) {
    let source = read_input(input);
    let page = parse_page(&source);
    let selection = selection_for(&page, from_block, to_block);
    let report = inspect(&page, &selection);

    let rendered = serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    println!("{rendered}");
}

/// Handle the reconstruct command
fn handle_reconstruct_command(input: &str) {
    let text = read_input(input);
    println!("{}", reconstruct(&text));
}

/// Handle the presets command
fn handle_presets_command(json: bool, config: &PagemarkConfig) {
    let presets: Vec<Preset> = config.presets.iter().map(Preset::from).collect();

    if json {
        let rendered = serde_json::to_string_pretty(&presets).unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    println!("Configured presets:\n");
    for preset in &presets {
        println!("  {}", preset.name);
    }
}

/// Handle the prompt command
fn handle_prompt_command(input: &str, kind: InputKind, style: Option<&str>) {
    let content = content_markdown(input, kind);
    let prompt = compose_prompt(style, &content).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    println!("{prompt}");
}

/// Handle the generate command
fn handle_generate_command(
    input: &str,
    kind: InputKind,
    style: Option<&str>,
    output: Option<&str>,
    config: &PagemarkConfig,
) {
    let content = content_markdown(input, kind);
    let prompt = compose_prompt(style, &content).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let client = ImageGenerationClient::new(config.credentials.gemini_api_key.clone())
        .with_api_base(config.generation.api_base.clone())
        .with_model(config.generation.model.clone())
        .with_sampling(config.generation.temperature, config.generation.top_p);
    let image = client.generate(&prompt).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    match (output, &image) {
        (Some(path), GeneratedImage::Inline { data_base64, .. }) => {
            let bytes =
                base64::Engine::decode(&base64::engine::general_purpose::STANDARD, data_base64)
                    .unwrap_or_else(|e| {
                        eprintln!("Error decoding image data: {e}");
                        std::process::exit(1);
                    });
            fs::write(path, bytes).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        (Some(_), GeneratedImage::Remote { uri }) => {
            eprintln!("The service returned a file URI instead of inline data; fetch it directly: {uri}");
            std::process::exit(1);
        }
        (None, _) => println!("{}", image.source_url()),
    }
}

/// Handle the append command
fn handle_append_command(
    page_id: &str,
    after: Option<&str>,
    image_url: &str,
    config: &PagemarkConfig,
) {
    let client = DocumentClient::new(config.credentials.notion_api_key.clone());
    let image = GeneratedImage::Remote {
        uri: image_url.to_string(),
    };

    let block_id = client.append_image(page_id, &image, after).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    println!("{block_id}");
}

/// How an input file should be turned into Markdown content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputKind {
    Html,
    Text,
}

/// Decide whether an input goes through HTML extraction or the plain-text
/// reconstructor. An explicit --from wins; otherwise the file extension
/// decides, with plain text as the default (stdin included).
fn input_kind(path: &str, explicit: Option<&str>) -> InputKind {
    match explicit {
        Some("html") => InputKind::Html,
        Some(_) => InputKind::Text,
        None => {
            let lower = path.to_lowercase();
            if lower.ends_with(".html") || lower.ends_with(".htm") {
                InputKind::Html
            } else {
                InputKind::Text
            }
        }
    }
}

/// Recover Markdown from the input according to its kind.
fn content_markdown(input: &str, kind: InputKind) -> String {
    let source = read_input(input);
    match kind {
        InputKind::Html => {
            let page = parse_page(&source);
            let selection = Selection::entire(&page);
            StrategyPipeline::with_defaults().extract(&page, &selection)
        }
        InputKind::Text => reconstruct(&source),
    }
}

/// Resolve the style choice for prompt composition.
///
/// `None` means as-is (content only). A missing or unknown choice is fatal.
fn resolve_style(matches: &ArgMatches, config: &PagemarkConfig) -> Option<String> {
    if matches.get_flag("as-is") {
        return None;
    }
    if let Some(text) = matches.get_one::<String>("style") {
        return Some(text.clone());
    }

    let name = match matches.get_one::<String>("preset") {
        Some(name) => name,
        None => {
            eprintln!("Choose a style: --preset <NAME>, --style <TEXT>, or --as-is");
            std::process::exit(1);
        }
    };

    match config.presets.iter().find(|p| p.name == *name) {
        Some(preset) => Some(preset.prompt.clone()),
        None => {
            eprintln!("Unknown preset '{name}'. Configured presets:");
            for preset in &config.presets {
                eprintln!("  {}", preset.name);
            }
            std::process::exit(1);
        }
    }
}

fn parse_page(source: &str) -> Page {
    Page::parse(source).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn selection_for(page: &Page, from_block: Option<&str>, to_block: Option<&str>) -> Selection {
    let (from, to) = match (from_block, to_block) {
        (None, None) => return Selection::entire(page),
        (Some(from), None) => (from, from),
        (None, Some(to)) => (to, to),
        (Some(from), Some(to)) => (from, to),
    };

    Selection::between_blocks(page, from, to).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn read_input(path: &str) -> String {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).unwrap_or_else(|e| {
            eprintln!("Error reading stdin: {e}");
            std::process::exit(1);
        });
        buffer
    } else {
        fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file '{path}': {e}");
            std::process::exit(1);
        })
    }
}

fn write_output(output: Option<&str>, content: &str) {
    match output {
        Some(path) => {
            fs::write(path, format!("{content}\n")).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => println!("{content}"),
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> PagemarkConfig {
    let loader = Loader::new().with_optional_file("pagemark.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut PagemarkConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(model) = take_override(extra_params, &["model"]) {
        config.generation.model = model;
    }
    if let Some(base) = take_override(extra_params, &["api-base", "api_base"]) {
        config.generation.api_base = base;
    }
    if let Some(raw) = take_override(extra_params, &["temperature"]) {
        config.generation.temperature = parse_float_arg("temperature", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["top-p", "top_p"]) {
        config.generation.top_p = parse_float_arg("top-p", &raw);
    }
    if let Some(key) = take_override(extra_params, &["gemini-api-key", "gemini-key"]) {
        config.credentials.gemini_api_key = key;
    }
    if let Some(key) = take_override(extra_params, &["notion-api-key", "notion-key"]) {
        config.credentials.notion_api_key = key;
    }
}

/// Unknown leftovers are fatal: no command has a sink for them, and a typoed
/// override silently doing nothing is worse than an error.
fn reject_unknown_overrides(extra_params: &HashMap<String, String>) {
    if extra_params.is_empty() {
        return;
    }

    let mut keys: Vec<&str> = extra_params.keys().map(|k| k.as_str()).collect();
    keys.sort_unstable();
    eprintln!("Unknown --extra overrides: {}", keys.join(", "));
    std::process::exit(1);
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_float_arg(flag: &str, raw: &str) -> f64 {
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Invalid numeric value '{raw}' for --extra-{flag}");
        std::process::exit(1);
    })
}
