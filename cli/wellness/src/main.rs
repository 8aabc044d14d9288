use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use rand::rngs::StdRng;
use wellness::batch::run_batch;
use wellness::form::run_form;
use wellness::profile::{
    generate_profile_template, load_profile, AnswerOverrides, Profile, DEFAULT_PROFILE_FILE,
};
use wellness::render_assessment;
use wellness_report::{summary_line, ReportFormat};
use wellness_risk::{Classifier, LifestyleInput, RngClassifier};

#[derive(Debug, Parser)]
#[command(
    name = "wellness",
    version,
    about = "Lifestyle-based health risk prediction from nine questionnaire answers",
    long_about = "wellness scores age, BMI, sleep, exercise, junk food, stress and smoking\n\
        into a Low / Medium / High lifestyle risk tier and prints a wellness report\n\
        with personalised tips.\n\n\
        This tool is for educational purpose only. It does not replace a doctor.\n\n\
        EXAMPLES:\n\
        \n  wellness assess                                  Assess the default profile\n\
        \n  wellness assess --age 45 --weight 82 --smoking yes   Override single answers\n\
        \n  wellness assess --profile wellness.toml --format html -o report.html\n\
        \n  wellness batch answers.ndjson                    Assess one profile per line\n\
        \n  wellness form                                    Answer the questionnaire interactively\n\
        \n  wellness init                                    Write a starter wellness.toml"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Assess one profile and print the report
    #[command(
        about = "Assess one profile and print the wellness report",
        long_about = "Classifies one set of answers and prints a summary line and report.\n\n\
            Answers come from the built-in defaults, then --profile, then individual flags."
    )]
    Assess(AssessArgs),

    /// Assess newline-delimited JSON profiles
    #[command(about = "Assess newline-delimited JSON profiles (one object per line)")]
    Batch(BatchArgs),

    /// Answer the questionnaire interactively
    #[command(
        about = "Answer the questionnaire interactively",
        long_about = "Asks each question in turn and prints the report at the end.\n\n\
            Commands:\n\
            \n  <Enter>  Keep the default shown in parentheses\n\
            \n  :quit    Abort without a report (also :q, :exit)"
    )]
    Form(FormArgs),

    /// Write a starter wellness.toml profile
    #[command(about = "Write a commented starter wellness.toml profile")]
    Init(InitArgs),
}

#[derive(Debug, Args, Clone, Default)]
struct ReportArgs {
    /// Report format: text, markdown, html or json
    #[arg(long, value_name = "FORMAT")]
    format: Option<ReportFormat>,

    /// Print only the one-line summary
    #[arg(long)]
    summary_only: bool,

    /// Seed for the confidence draw (reproducible output)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Write the report to FILE instead of stdout
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    out: Option<PathBuf>,
}

#[derive(Debug, Args, Clone, Default)]
struct AssessArgs {
    /// TOML profile with [answers] and [report] tables
    #[arg(long, value_name = "FILE")]
    profile: Option<PathBuf>,

    #[command(flatten)]
    answers: AnswerOverrides,

    #[command(flatten)]
    report: ReportArgs,
}

#[derive(Debug, Args, Clone, Default)]
struct FormArgs {
    /// TOML profile whose answers become the form defaults
    #[arg(long, value_name = "FILE")]
    profile: Option<PathBuf>,

    #[command(flatten)]
    report: ReportArgs,
}

#[derive(Debug, Args, Clone, Default)]
struct BatchArgs {
    /// NDJSON input file (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Emit one JSON assessment per line instead of summary lines
    #[arg(long)]
    json: bool,

    /// Seed for the confidence draws
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

#[derive(Debug, Args, Clone, Default)]
struct InitArgs {
    /// Profile path (default: wellness.toml)
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

/// Report settings after merging flags over the profile.
#[derive(Debug, Clone, PartialEq)]
struct Resolved {
    format: ReportFormat,
    summary_only: bool,
    seed: Option<u64>,
}

fn resolve_report(args: &ReportArgs, profile: &Profile) -> Result<Resolved, String> {
    let from_profile = profile.report_format().map_err(|e| e.to_string())?;
    Ok(Resolved {
        format: args.format.or(from_profile).unwrap_or_default(),
        summary_only: args.summary_only || profile.report.summary_only,
        seed: args.seed.or(profile.report.seed),
    })
}

fn load_optional_profile(path: &Option<PathBuf>) -> Result<Profile, String> {
    match path {
        Some(p) => load_profile(p).map_err(|e| e.to_string()),
        None => Ok(Profile::default()),
    }
}

fn make_classifier(seed: Option<u64>) -> RngClassifier<StdRng> {
    match seed {
        Some(s) => {
            log::debug!("using seeded confidence draws (seed {s})");
            RngClassifier::seeded(s)
        }
        None => RngClassifier::from_entropy(),
    }
}

fn write_output(text: &str, out: &Option<PathBuf>) -> Result<(), String> {
    match out {
        Some(path) => {
            fs::write(path, text)
                .map_err(|e| format!("failed to write '{}': {e}", path.display()))?;
            log::info!("report written to '{}'", path.display());
            Ok(())
        }
        None => {
            print!("{text}");
            Ok(())
        }
    }
}

fn read_input(input: &Option<PathBuf>) -> Result<String, String> {
    if let Some(path) = input {
        fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {e}", path.display()))
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read from stdin: {e}"))?;
        Ok(buf)
    }
}

fn assess_and_emit(input: &LifestyleInput, settings: &Resolved, out: &Option<PathBuf>) -> i32 {
    let mut classifier = make_classifier(settings.seed);
    let assessment = match classifier.assess(input) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    log::info!(
        "assessment: tier={} score={} bmi={:.1}",
        assessment.tier,
        assessment.score(),
        assessment.bmi
    );

    let text = match render_assessment(&assessment, settings.format, settings.summary_only) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    match write_output(&text, out) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {e}");
            2
        }
    }
}

fn run_assess(args: &AssessArgs) -> i32 {
    let profile = match load_optional_profile(&args.profile) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    let settings = match resolve_report(&args.report, &profile) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    let input = args.answers.apply(profile.answers);
    assess_and_emit(&input, &settings, &args.report.out)
}

fn run_form_cmd(args: &FormArgs) -> i32 {
    let profile = match load_optional_profile(&args.profile) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    let settings = match resolve_report(&args.report, &profile) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    if let Err(e) = profile.answers.validate() {
        eprintln!("error: profile answers: {e}");
        return 2;
    }
    match run_form(profile.answers) {
        Ok(Some(input)) => assess_and_emit(&input, &settings, &args.report.out),
        Ok(None) => {
            eprintln!("note: form cancelled, no report generated");
            1
        }
        Err(e) => {
            eprintln!("error: failed to read answers: {e}");
            2
        }
    }
}

fn run_batch_cmd(args: &BatchArgs) -> i32 {
    let text = match read_input(&args.input) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    let mut classifier = make_classifier(args.seed);
    let outcome = run_batch(&text, &mut classifier);

    for err in &outcome.errors {
        eprintln!("error: {err}");
    }

    let summary = outcome.summary();
    if args.json {
        if let Err(e) = outcome.write_json_lines(io::stdout().lock()) {
            eprintln!("error: {e}");
            return 2;
        }
        eprintln!("{summary}");
    } else {
        for entry in &outcome.entries {
            println!("{:>4}: {}", entry.line, summary_line(&entry.assessment));
        }
        println!("{summary}");
    }

    if outcome.is_clean() {
        0
    } else {
        1
    }
}

fn run_init(args: &InitArgs) -> i32 {
    let path = args
        .path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PROFILE_FILE));
    if path.exists() && !args.force {
        eprintln!(
            "error: '{}' already exists (use --force to overwrite)",
            path.display()
        );
        return 2;
    }
    if let Err(e) = fs::write(&path, generate_profile_template()) {
        eprintln!("error: failed to write '{}': {e}", path.display());
        return 2;
    }
    println!("wrote {}", path.display());
    0
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, refines the level picked from -v.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let rc = match cli.command {
        Some(Command::Assess(args)) => run_assess(&args),
        Some(Command::Batch(args)) => run_batch_cmd(&args),
        Some(Command::Form(args)) => run_form_cmd(&args),
        Some(Command::Init(args)) => run_init(&args),
        None => run_assess(&AssessArgs::default()),
    };
    log::debug!("exiting with code {rc}");
    rc
}

fn main() {
    std::process::exit(run_cli());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn init_writes_template_and_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wellness.toml");
        let args = InitArgs {
            path: Some(path.clone()),
            force: false,
        };
        assert_eq!(run_init(&args), 0);
        assert!(path.exists());
        assert_eq!(run_init(&args), 2);

        let forced = InitArgs {
            path: Some(path.clone()),
            force: true,
        };
        assert_eq!(run_init(&forced), 0);
    }

    #[test]
    fn assess_writes_json_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.json");
        let args = AssessArgs {
            report: ReportArgs {
                format: Some(ReportFormat::Json),
                seed: Some(1),
                out: Some(out.clone()),
                ..ReportArgs::default()
            },
            ..AssessArgs::default()
        };
        assert_eq!(run_assess(&args), 0);

        let text = fs::read_to_string(&out).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["tier"], "low");
        assert_eq!(value["score"], 1);
    }

    #[test]
    fn assess_uses_profile_and_flags() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().join("me.toml");
        fs::write(
            &profile,
            "[answers]\nage = 55\nsmoking = true\n\n[report]\nsummary_only = true\nseed = 3\n",
        )
        .unwrap();
        let out = dir.path().join("summary.txt");

        let cli = Cli::try_parse_from([
            "wellness",
            "assess",
            "--profile",
            profile.to_str().unwrap(),
            "--stress",
            "high",
            "--junk",
            "6",
            "-o",
            out.to_str().unwrap(),
        ])
        .unwrap();
        let Some(Command::Assess(args)) = cli.command else {
            panic!("expected Assess command");
        };
        assert_eq!(run_assess(&args), 0);

        // age 55 (+2), junk 6 (+2), high stress (+2), smoking (+2) = 8
        let text = fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("🔴 High Health Risk (Take Action!) | BMI: 21.5"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn invalid_answer_exits_with_2() {
        let args = AssessArgs {
            answers: AnswerOverrides {
                age: Some(70),
                ..AnswerOverrides::default()
            },
            ..AssessArgs::default()
        };
        assert_eq!(run_assess(&args), 2);
    }

    #[test]
    fn form_rejects_invalid_profile_before_asking() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().join("me.toml");
        fs::write(&profile, "[answers]\nage = 70\n").unwrap();
        let args = FormArgs {
            profile: Some(profile),
            ..FormArgs::default()
        };
        assert_eq!(run_form_cmd(&args), 2);
    }

    #[test]
    fn missing_profile_exits_with_2() {
        let dir = tempfile::tempdir().unwrap();
        let args = AssessArgs {
            profile: Some(dir.path().join("missing.toml")),
            ..AssessArgs::default()
        };
        assert_eq!(run_assess(&args), 2);
    }

    #[test]
    fn batch_with_bad_record_exits_with_1() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("answers.ndjson");
        fs::write(&input, "{\"age\": 30}\n{\"age\": 99}\n").unwrap();
        let args = BatchArgs {
            input: Some(input),
            seed: Some(1),
            ..BatchArgs::default()
        };
        assert_eq!(run_batch_cmd(&args), 1);
    }

    #[test]
    fn flags_override_profile_report_settings() {
        let profile = wellness::profile::parse_profile(
            "[report]\nformat = \"html\"\nseed = 4\n",
        )
        .unwrap();
        let args = ReportArgs {
            format: Some(ReportFormat::Markdown),
            ..ReportArgs::default()
        };
        assert_eq!(
            resolve_report(&args, &profile).unwrap(),
            Resolved {
                format: ReportFormat::Markdown,
                summary_only: false,
                seed: Some(4),
            }
        );
        assert_eq!(
            resolve_report(&ReportArgs::default(), &Profile::default()).unwrap(),
            Resolved {
                format: ReportFormat::Text,
                summary_only: false,
                seed: None,
            }
        );
    }

    #[test]
    fn cli_parses_answer_flags() {
        let cli = Cli::try_parse_from([
            "wellness", "assess", "--age", "40", "--gender", "male", "--height", "175",
            "--weight", "80", "--sleep", "6.5", "--exercise", "1", "--junk", "4", "--stress",
            "3", "--smoking", "no", "--format", "md",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Assess(args)) => {
                let input = args.answers.apply(LifestyleInput::default());
                assert_eq!(input.age, 40);
                assert_eq!(input.gender, wellness_risk::Gender::Male);
                assert_eq!(input.sleep_hours, 6.5);
                assert_eq!(input.stress_level, wellness_risk::StressLevel::High);
                assert!(!input.smoking);
                assert_eq!(args.report.format, Some(ReportFormat::Markdown));
            }
            _ => panic!("expected Assess command"),
        }
    }

    #[test]
    fn cli_rejects_unknown_gender() {
        assert!(Cli::try_parse_from(["wellness", "assess", "--gender", "robot"]).is_err());
    }

    #[test]
    fn cli_parses_verbose_flag() {
        let cli = Cli::try_parse_from(["wellness", "-vvv"]).unwrap();
        assert_eq!(cli.verbose, 3, "verbose count should be 3 for -vvv");
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_help_contains_expected_content() {
        use clap::CommandFactory;
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        cmd.write_long_help(&mut buf).unwrap();
        let help = String::from_utf8(buf).unwrap();

        assert!(help.contains("wellness"));
        assert!(help.contains("EXAMPLES"));
        assert!(help.contains("does not replace a doctor"));
        for sub in ["assess", "batch", "form", "init"] {
            assert!(help.contains(sub), "help should list {sub} subcommand");
        }
    }

    #[test]
    fn form_subcommand_help_mentions_commands() {
        use clap::CommandFactory;
        let cmd = Cli::command();
        let form_cmd = cmd
            .get_subcommands()
            .find(|c| c.get_name() == "form")
            .expect("form subcommand should exist");
        let long_about = form_cmd
            .get_long_about()
            .map(|s| s.to_string())
            .unwrap_or_default();
        assert!(long_about.contains(":quit"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
