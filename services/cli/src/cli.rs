use crate::menu::run_menu;
use crate::render::{
    render_candidates, render_destinations, render_matches, render_probability,
    render_statistics, ListFormat, ReportFormat,
};
use clap::{Args, Parser, Subcommand};
use placement_matcher::config::AppConfig;
use placement_matcher::error::AppError;
use placement_matcher::matching::report::views::CandidateView;
use placement_matcher::matching::report::{
    candidate_probability, filter_by_language, filter_by_specialization, list_candidates,
    list_destinations, list_eligible_pairs, statistics_summary,
};
use placement_matcher::matching::{Candidate, MatchingContext, Vocabulary};
use placement_matcher::telemetry;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Volunteer Placement Matcher",
    about = "Match generated medical graduates to field assignments by language and specialization",
    version
)]
pub(crate) struct Cli {
    /// Seed for the generated cohort (overrides APP_SEED)
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Number of participants to generate (overrides APP_CANDIDATE_COUNT)
    #[arg(
        long = "candidates",
        visible_alias = "cohort-size",
        global = true,
        value_parser = parse_cohort_size
    )]
    cohort_size: Option<usize>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Run the interactive menu (default command)
    Menu,
    /// List generated participants, optionally filtered
    Candidates(CandidateListArgs),
    /// List destination countries and their requirements
    Destinations(ListArgs),
    /// List every eligible participant-country pair
    Matches(ListArgs),
    /// Show the match probability for one participant
    Probability(ProbabilityArgs),
    /// Show overall matching statistics
    Stats(ReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ListArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: ListFormat,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CandidateListArgs {
    /// Only show participants fluent in this language
    #[arg(long)]
    language: Option<String>,
    /// Only show participants with this specialization
    #[arg(long)]
    specialization: Option<String>,
    #[command(flatten)]
    list: ListArgs,
}

#[derive(Args, Debug)]
pub(crate) struct ProbabilityArgs {
    /// Participant id (zero-based)
    #[arg(long)]
    candidate: usize,
    #[command(flatten)]
    report: ReportArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: ReportFormat,
}

fn parse_cohort_size(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err("cohort size must be at least 1".to_string()),
        Ok(count) => Ok(count),
        Err(err) => Err(format!("failed to parse '{raw}' as a cohort size ({err})")),
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(seed) = cli.seed {
        config.generation.seed = Some(seed);
    }
    if let Some(count) = cli.cohort_size {
        config.generation.candidate_count = count;
    }

    telemetry::init(&config.telemetry)?;

    let seed = config.generation.resolve_seed();
    let mut rng = StdRng::seed_from_u64(seed);
    let context =
        MatchingContext::generate(&config.generation, &Vocabulary::standard(), &mut rng)?;
    info!(?config.environment, seed, "placement matcher ready");

    let command = cli.command.unwrap_or(Command::Menu);
    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(command, &context, &mut stdin.lock(), &mut stdout.lock())
}

pub(crate) fn execute<R, W>(
    command: Command,
    context: &MatchingContext,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    match command {
        Command::Menu => run_menu(context, input, out),
        Command::Candidates(args) => {
            let candidates = select_candidates(context.candidates(), &args);
            render_candidates(out, &candidates, args.list.format)
        }
        Command::Destinations(args) => render_destinations(
            out,
            &list_destinations(context.destinations()),
            args.format,
        ),
        Command::Matches(args) => {
            let pairs = list_eligible_pairs(
                context.candidates(),
                context.destinations(),
                context.relation(),
            )?;
            render_matches(out, &pairs, args.format)
        }
        Command::Probability(args) => {
            let view = candidate_probability(context, args.candidate)?;
            render_probability(out, &view, args.report.format)
        }
        Command::Stats(args) => {
            render_statistics(out, &statistics_summary(context)?, args.format)
        }
    }
}

fn select_candidates(
    candidates: &[Candidate],
    args: &CandidateListArgs,
) -> Vec<CandidateView> {
    let mut selected = match &args.language {
        Some(language) => filter_by_language(candidates, language),
        None => list_candidates(candidates),
    };
    if let Some(specialization) = &args.specialization {
        let allowed = filter_by_specialization(candidates, specialization);
        selected.retain(|view| allowed.contains(view));
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use placement_matcher::matching::{Destination, MatchError};
    use std::io::Cursor;

    fn context() -> MatchingContext {
        MatchingContext::from_parts(
            vec![
                Candidate::new(0, "English", "Pediatrics"),
                Candidate::new(1, "Spanish", "Geriatrics"),
                Candidate::new(2, "English", "Radiology"),
            ],
            vec![
                Destination::new(0, "Kenya", "English", "Pediatrics"),
                Destination::new(1, "Peru", "Spanish", "Geriatrics"),
            ],
        )
        .expect("fixture builds")
    }

    fn dispatch(args: &[&str]) -> Result<String, AppError> {
        let cli = Cli::try_parse_from(args).expect("arguments parse");
        let command = cli.command.unwrap_or(Command::Menu);
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();
        execute(command, &context(), &mut input, &mut out)?;
        Ok(String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn global_flags_parse_anywhere() {
        let cli = Cli::try_parse_from([
            "placement-matcher",
            "stats",
            "--seed",
            "12",
            "--cohort-size",
            "40",
        ])
        .expect("arguments parse");
        assert_eq!(cli.seed, Some(12));
        assert_eq!(cli.cohort_size, Some(40));
        assert!(matches!(cli.command, Some(Command::Stats(_))));
    }

    #[test]
    fn candidates_flag_sets_cohort_size() {
        let cli = Cli::try_parse_from(["placement-matcher", "--candidates", "5", "stats"])
            .expect("arguments parse");
        assert_eq!(cli.cohort_size, Some(5));
        assert!(matches!(cli.command, Some(Command::Stats(_))));
    }

    #[test]
    fn zero_cohort_size_is_rejected() {
        assert!(Cli::try_parse_from(["placement-matcher", "--cohort-size", "0"]).is_err());
        assert!(Cli::try_parse_from(["placement-matcher", "--candidates", "0"]).is_err());
    }

    #[test]
    fn default_command_is_the_menu() {
        let text = dispatch(&["placement-matcher"]).expect("menu runs");
        assert!(text.contains("UCR Medical Matcher"));
        assert!(text.ends_with("Exiting program...\n"));
    }

    #[test]
    fn candidates_can_be_filtered() {
        let text = dispatch(&[
            "placement-matcher",
            "candidates",
            "--language",
            "english",
            "--specialization",
            "radiology",
            "--format",
            "csv",
        ])
        .expect("listing renders");

        assert_eq!(
            text,
            "id,name,language,specialization\n2,Participant_3,English,Radiology\n"
        );
    }

    #[test]
    fn candidates_filter_by_specialization_alone() {
        let text = dispatch(&[
            "placement-matcher",
            "candidates",
            "--specialization",
            "GERIATRICS",
            "--format",
            "csv",
        ])
        .expect("listing renders");

        assert_eq!(
            text,
            "id,name,language,specialization\n1,Participant_2,Spanish,Geriatrics\n"
        );
    }

    #[test]
    fn probability_reports_json() {
        let text = dispatch(&[
            "placement-matcher",
            "probability",
            "--candidate",
            "1",
            "--format",
            "json",
        ])
        .expect("report renders");

        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["candidate"]["name"], "Participant_2");
        assert_eq!(value["eligible_destinations"][0], "Peru");
        assert_eq!(value["probability"]["value"], 0.5);
    }

    #[test]
    fn probability_for_unknown_candidate_fails() {
        let err = dispatch(&["placement-matcher", "probability", "--candidate", "3"]).unwrap_err();
        assert!(matches!(
            err,
            AppError::Matching(MatchError::InvalidIndex { index: 3, .. })
        ));
    }

    #[test]
    fn matches_and_stats_render_text() {
        let text = dispatch(&["placement-matcher", "matches"]).expect("matches render");
        assert!(text.contains("Participant_1 (English, Pediatrics)  -->  Kenya"));
        assert!(text.contains("Participant_2 (Spanish, Geriatrics)  -->  Peru"));

        let text = dispatch(&["placement-matcher", "stats"]).expect("stats render");
        assert!(text.contains("Total participant-country pairs: 6"));
        assert!(text.contains("P(match) = 2 / 6 = 0.3333"));
        assert!(text.contains("Participants with no eligible country: 1"));
    }
}
