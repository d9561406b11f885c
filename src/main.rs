// Fri Feb 13 2026 - Alex

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use srg_log_translator::{
    config::Config,
    logfile::LogFile,
    mapping::SymbolTable,
    report::ReportSink,
    rewrite::{ChainSegmenter, LineRewriter},
    utils::logging,
};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Translates SRG names in crash logs to readable MCP names", long_about = None)]
struct Args {
    #[arg(short, long)]
    input: PathBuf,

    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long)]
    mcp_config: Option<PathBuf>,

    #[arg(long)]
    methods: Option<PathBuf>,

    #[arg(long)]
    fields: Option<PathBuf>,

    #[arg(long, default_value = "logs")]
    report_dir: PathBuf,

    #[arg(long)]
    overwrite: bool,

    #[arg(long)]
    json_summary: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    no_progress: bool,
}

fn main() {
    let args = Args::parse();

    logging::init_logger(args.verbose);

    println!("{}", "SRG Log Translator".cyan().bold());
    println!("{}", "=".repeat(50).cyan());
    println!();

    let start_time = Instant::now();

    let config = match build_config(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{} {}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("{} {}", "[!]".red(), e);
        std::process::exit(1);
    }

    if let Some(parent) = config.output_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).ok();
        }
    }
    fs::create_dir_all(&config.report_dir).ok();

    println!(
        "{} Loading MCP data from {} and {}",
        "[*]".blue(),
        config.methods_file.display(),
        config.fields_file.display()
    );

    let table = match SymbolTable::load(&config.methods_file, &config.fields_file) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{} Failed to load mapping data: {}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    println!(
        "{} Loaded {} method and {} field mappings",
        "[+]".green(),
        table.method_count(),
        table.field_count()
    );

    println!("{} Reading log from {}", "[*]".blue(), config.input_file.display());

    let lines = match LogFile::read(&config.input_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("{} Failed to read log: {}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    println!("{} Read {} lines", "[+]".green(), lines.len());

    println!("{} Replacing SRG names", "[*]".blue());

    let rewriter = LineRewriter::new(&table);
    let mut sink = ReportSink::new();

    let rewritten = if args.no_progress {
        rewriter.rewrite_all(&lines, &mut sink)
    } else {
        let pb = ProgressBar::new(lines.len() as u64);
        pb.set_style(ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"));
        pb.set_message("Rewriting lines...");

        let mut out = Vec::with_capacity(lines.len());
        for line in &lines {
            out.push(rewriter.rewrite_line(line, &mut sink));
            pb.inc(1);
        }
        pb.finish_with_message("Rewrite complete");
        out
    };

    println!("{} Edited {} lines", "[+]".green(), sink.lines_edited());
    println!("{} Replaced {} entries", "[+]".green(), sink.strings_replaced());

    println!("{} Segmenting method chains", "[*]".blue());

    let segmenter = ChainSegmenter::new();
    let segmented = segmenter.segment_all(&rewritten);

    println!("{} Saving edited log to {}", "[*]".blue(), config.output_file.display());

    if let Err(e) = sink.save(&segmented, &config.output_file) {
        eprintln!("{} Failed to save edited log: {}", "[!]".red(), e);
        std::process::exit(1);
    }

    let report_path = config.unresolved_report_path();

    println!("{} Saving unresolved entries to {}", "[*]".blue(), report_path.display());

    if let Err(e) = sink.save_unresolved_log(&report_path) {
        eprintln!("{} Failed to save unresolved report: {}", "[!]".red(), e);
        std::process::exit(1);
    }

    if let Some(json_path) = &args.json_summary {
        match serde_json::to_string_pretty(&sink.summary()) {
            Ok(json) => {
                if let Err(e) = fs::write(json_path, json) {
                    eprintln!("{} Failed to save JSON summary: {}", "[!]".red(), e);
                } else {
                    println!("{} JSON summary saved to: {}", "[+]".green(), json_path.display());
                }
            }
            Err(e) => eprintln!("{} Failed to serialize summary: {}", "[!]".red(), e),
        }
    }

    let elapsed = start_time.elapsed();

    println!();
    println!("{}", "=".repeat(50).cyan());
    println!("{} Translation complete in {:.2}s", "[+]".green(), elapsed.as_secs_f64());
    println!("{} Lines edited: {}", "[+]".green(), sink.lines_edited().to_string().green());
    println!("{} Entries replaced: {}", "[+]".green(), sink.strings_replaced().to_string().green());
    println!("{} Unresolved entries: {}", "[+]".green(), sink.unresolved_count().to_string().yellow());
}

fn build_config(args: &Args) -> Result<Config, String> {
    let mut config = match (&args.mcp_config, &args.methods, &args.fields) {
        (Some(dir), _, _) => Config::from_mcp_dir(args.input.clone(), dir),
        (None, Some(methods), Some(fields)) => {
            Config::new(args.input.clone(), methods.clone(), fields.clone())
        }
        _ => {
            return Err(
                "Pass --mcp-config <dir>, or both --methods <file> and --fields <file>".to_string(),
            )
        }
    };

    if let Some(output) = &args.output {
        config = config.with_output_file(output.clone());
    }

    config = config
        .with_report_dir(args.report_dir.clone())
        .with_overwrite(args.overwrite);

    Ok(config)
}
