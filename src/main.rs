use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use gramchk::cli::output::{self, OutputFormat};
use gramchk::cli::{interactive, spinner};
use gramchk::client::types::{
    CitationStyle, EmailType, EssayHelpType, ParaphraseStyle, RewriteStyle, Tone,
};
use gramchk::session::{Outcome, Panel};
use gramchk::stats::TextStats;
use gramchk::{Config, GrammarClient, Session};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "gramchk")]
#[command(version, about = "Grammar checking from the command line", long_about = None)]
struct Cli {
    /// Files to check ("-" reads standard input)
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Fix issues in place using the service's automatic corrections
    #[arg(short, long)]
    fix: bool,

    /// Interactive mode for picking suggestions marker by marker
    #[arg(short, long, requires = "fix")]
    interactive: bool,

    /// Write the annotated text of the last checked file as HTML
    #[arg(long, value_name = "PATH")]
    html: Option<PathBuf>,

    /// Print document insights after each report
    #[arg(long)]
    insights: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Exit with code 0 even if issues are found
    #[arg(long)]
    no_fail: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text", global = true)]
    format: OutputFormat,

    /// Base URL of the analysis service
    #[arg(long, env = "GRAMCHK_SERVER", global = true)]
    server: Option<String>,

    /// Log requests and dropped spans
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show local text statistics (no network)
    Stats { file: PathBuf },
    /// Paraphrase the text
    Paraphrase {
        file: PathBuf,
        /// standard, formal, casual, creative
        #[arg(short, long)]
        style: Option<ParaphraseStyle>,
    },
    /// Generate citations for claims in the text
    Citations {
        file: PathBuf,
        /// APA, MLA, Chicago, Harvard
        #[arg(short, long)]
        style: Option<CitationStyle>,
    },
    /// Estimate whether the text is AI-generated
    Detect { file: PathBuf },
    /// Essay writing help
    Essay {
        file: PathBuf,
        /// structure, thesis, transitions, conclusion
        #[arg(short, long)]
        kind: Option<EssayHelpType>,
    },
    /// Download a PDF analysis report
    Report {
        file: PathBuf,
        #[arg(short = 'O', long)]
        output: Option<PathBuf>,
    },
    /// Rewrite the text in another style
    Rewrite {
        file: PathBuf,
        /// improve, formal, casual, concise
        #[arg(short, long, default_value = "improve")]
        style: RewriteStyle,
    },
    /// Adjust the tone of the text
    Tone {
        file: PathBuf,
        /// professional, friendly, assertive, diplomatic
        #[arg(short, long, default_value = "professional")]
        tone: Tone,
    },
    /// Draft an email from a short prompt
    Email {
        prompt: String,
        /// professional, casual, follow-up
        #[arg(short, long, default_value = "professional")]
        kind: EmailType,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if let Err(e) = SimpleLogger::new().with_level(level).env().init() {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "gramchk", &mut io::stdout());
        return Ok(());
    }

    let colored = !cli.no_color;

    if let Some(command) = cli.command {
        if let Err(e) = handle_command(command, cli.server, &cli.format, colored) {
            output::print_error(&format!("{:#}", e), colored);
            std::process::exit(2);
        }
        return Ok(());
    }

    if cli.files.is_empty() {
        anyhow::bail!("No files specified. Use --help for usage information.");
    }

    let config = Config::load(cli.server.clone())?;
    let client = GrammarClient::from_config(&config)?;

    let mut total_issues = 0;
    let mut total_fixed = 0;
    let mut failures = 0;

    for file_path in &cli.files {
        if !is_stdin(file_path) && !file_path.exists() {
            output::print_error(&format!("File not found: {}", file_path.display()), colored);
            failures += 1;
            continue;
        }

        let original = read_input(file_path)?;
        let mut session = Session::new(&original)
            .with_popup_width(interactive::TERMINAL_POPUP_WIDTH);

        let pb = spinner(&format!("Checking {}...", file_path.display()));
        let checked = session.check(&client);
        pb.finish_and_clear();

        match checked {
            Ok(Outcome::Skipped) => {
                output::print_skipped(file_path, colored);
                continue;
            }
            Ok(_) => {}
            Err(e) => {
                output::print_error(&e.to_string(), colored);
                failures += 1;
                continue;
            }
        }

        if cli.fix {
            let fixed = if cli.interactive {
                interactive::run(&mut session, &client, colored)?
            } else {
                let pb = spinner("Applying fixes...");
                let outcome = session.auto_fix(&client);
                pb.finish_and_clear();
                match outcome {
                    Ok(_) => match &session.results().auto_fix {
                        Some(fix) => {
                            if let OutputFormat::Text = cli.format {
                                output::print_fix_changes(file_path, fix, colored);
                            }
                            fix.total_fixes
                        }
                        None => 0,
                    },
                    Err(e) => {
                        output::print_error(&e.to_string(), colored);
                        failures += 1;
                        continue;
                    }
                }
            };

            if session.text() != original {
                write_output(file_path, session.text())?;
            }
            total_fixed += fixed;
        } else {
            output::print_check_report(file_path, &session, colored, &cli.format);
            if cli.insights {
                session.open_panel(Panel::Insights);
            }
            if session.is_panel_open(Panel::Insights) {
                if let Some(analysis) = session.analysis() {
                    output::print_insights(analysis, colored);
                }
            }
            total_issues += session.spans().len();
        }

        if let Some(html_path) = &cli.html {
            let page = format!(
                "<div class=\"annotated\" style=\"white-space: pre-wrap\">{}</div>\n",
                session.document().to_html()
            );
            fs::write(html_path, page)
                .with_context(|| format!("Failed to write file: {}", html_path.display()))?;
        }
    }

    if let OutputFormat::Text = cli.format {
        if cli.fix {
            output::print_fix_summary(total_fixed, &cli.files, colored);
        } else {
            output::print_check_summary(total_issues, &cli.files, colored);
        }
    }

    if failures > 0 {
        std::process::exit(2);
    }
    if total_issues > 0 && !cli.no_fail && !cli.fix {
        std::process::exit(1);
    }

    Ok(())
}

fn handle_command(
    command: Commands,
    server: Option<String>,
    format: &OutputFormat,
    colored: bool,
) -> Result<()> {
    if let Commands::Stats { file } = &command {
        let text = read_input(file)?;
        output::print_stats(file, &TextStats::from_text(&text), format);
        return Ok(());
    }

    let config = Config::load(server)?;
    let client = GrammarClient::from_config(&config)?;

    match command {
        Commands::Stats { .. } => {}
        Commands::Paraphrase { file, style } => {
            let mut session = Session::new(&read_input(&file)?);
            let style = style.unwrap_or(config.paraphrase_style);
            let outcome = with_spinner("Paraphrasing...", || session.paraphrase(&client, style))?;
            if report_skipped(outcome, &file, colored) {
                return Ok(());
            }
            if let Some(result) = &session.results().paraphrase {
                output::print_paraphrase(result, format, colored);
            }
        }
        Commands::Citations { file, style } => {
            let mut session = Session::new(&read_input(&file)?);
            let style = style.unwrap_or(config.citation_style);
            let outcome = with_spinner("Finding citations...", || session.citations(&client, style))?;
            if report_skipped(outcome, &file, colored) {
                return Ok(());
            }
            if let Some(result) = &session.results().citations {
                output::print_citations(result, format, colored);
            }
        }
        Commands::Detect { file } => {
            let mut session = Session::new(&read_input(&file)?);
            let outcome = with_spinner("Analyzing...", || session.detect_ai(&client))?;
            if report_skipped(outcome, &file, colored) {
                return Ok(());
            }
            if let Some(result) = &session.results().ai_detection {
                output::print_ai_detection(result, format, colored);
            }
        }
        Commands::Essay { file, kind } => {
            let mut session = Session::new(&read_input(&file)?);
            let kind = kind.unwrap_or(config.essay_help);
            let outcome = with_spinner("Reviewing essay...", || session.essay_help(&client, kind))?;
            if report_skipped(outcome, &file, colored) {
                return Ok(());
            }
            if let Some(result) = &session.results().essay_help {
                output::print_essay_help(result, format, colored);
            }
        }
        Commands::Report { file, output: target } => {
            let mut session = Session::new(&read_input(&file)?);
            let outcome = with_spinner("Checking...", || session.check(&client))?;
            if report_skipped(outcome, &file, colored) {
                return Ok(());
            }
            let bytes = with_spinner("Generating report...", || session.pdf_report(&client))?;
            if let Some(bytes) = bytes {
                let target = target.unwrap_or_else(|| PathBuf::from(&config.report_name));
                fs::write(&target, bytes)
                    .with_context(|| format!("Failed to write file: {}", target.display()))?;
                println!("✓ Report saved to {}", target.display());
            }
        }
        Commands::Rewrite { file, style } => {
            let mut session = Session::new(&read_input(&file)?);
            let outcome = with_spinner("Rewriting...", || session.ai_rewrite(&client, style))?;
            if report_skipped(outcome, &file, colored) {
                return Ok(());
            }
            if let Some(result) = &session.results().rewrite {
                output::print_rewrite(result, format, colored);
            }
        }
        Commands::Tone { file, tone } => {
            let mut session = Session::new(&read_input(&file)?);
            let outcome = with_spinner("Adjusting tone...", || session.adjust_tone(&client, tone))?;
            if report_skipped(outcome, &file, colored) {
                return Ok(());
            }
            if let Some(result) = &session.results().tone {
                output::print_tone(result, format, colored);
            }
        }
        Commands::Email { prompt, kind } => {
            let mut session = Session::new("");
            let outcome = with_spinner("Drafting email...", || {
                session.generate_email(&client, &prompt, kind)
            })?;
            if let Outcome::Skipped = outcome {
                anyhow::bail!("The email prompt is empty.");
            }
            if let Some(result) = &session.results().email {
                output::print_email(result, format);
            }
        }
    }

    Ok(())
}

fn with_spinner<T, E>(message: &str, f: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
    let pb = spinner(message);
    let result = f();
    pb.finish_and_clear();
    result
}

fn report_skipped(outcome: Outcome, file: &Path, colored: bool) -> bool {
    if let Outcome::Skipped = outcome {
        output::print_skipped(file, colored);
        return true;
    }
    false
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_input(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read standard input")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

fn write_output(path: &Path, text: &str) -> Result<()> {
    if is_stdin(path) {
        print!("{}", text);
        return Ok(());
    }
    fs::write(path, text).with_context(|| format!("Failed to write file: {}", path.display()))
}
