use crate::render::{
    render_candidates, render_destinations, render_matches, render_probability,
    render_statistics, ListFormat, ReportFormat,
};
use placement_matcher::error::AppError;
use placement_matcher::matching::report::{
    candidate_probability, list_candidates, list_destinations, list_eligible_pairs,
    statistics_summary,
};
use placement_matcher::matching::MatchingContext;
use std::io::{BufRead, Write};
use tracing::debug;

const MENU: &str = "\n========== UCR Medical Matcher ==========
1. Show all participants
2. Show all countries
3. Show all valid matches
4. Show match probability for a participant
5. Show overall matching statistics
0. Exit
----------------------------------------
Enter choice: ";

/// Runs the interactive loop until the user exits or input ends.
pub(crate) fn run_menu<R, W>(
    context: &MatchingContext,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    loop {
        write!(out, "{MENU}")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            writeln!(out, "\nExiting program...")?;
            return Ok(());
        };

        match line.trim().parse::<u8>() {
            Ok(1) => render_candidates(
                out,
                &list_candidates(context.candidates()),
                ListFormat::Text,
            )?,
            Ok(2) => render_destinations(
                out,
                &list_destinations(context.destinations()),
                ListFormat::Text,
            )?,
            Ok(3) => {
                let pairs = list_eligible_pairs(
                    context.candidates(),
                    context.destinations(),
                    context.relation(),
                )?;
                render_matches(out, &pairs, ListFormat::Text)?;
            }
            Ok(4) => prompt_probability(context, input, out)?,
            Ok(5) => render_statistics(out, &statistics_summary(context)?, ReportFormat::Text)?,
            Ok(0) => {
                writeln!(out, "Exiting program...")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }
}

fn prompt_probability<R, W>(
    context: &MatchingContext,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let last_id = context.candidates().len().saturating_sub(1);
    write!(out, "\nEnter participant ID (0 - {last_id}): ")?;
    out.flush()?;

    let Some(line) = read_line(input)? else {
        return Ok(());
    };

    let Ok(candidate_id) = line.trim().parse::<usize>() else {
        writeln!(out, "Invalid participant ID.")?;
        return Ok(());
    };

    match candidate_probability(context, candidate_id) {
        Ok(view) => render_probability(out, &view, ReportFormat::Text),
        Err(err) if err.is_invalid_index() => {
            debug!(%err, "rejected participant lookup");
            writeln!(out, "Invalid participant ID.")?;
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Undecodable bytes become replacement characters, which then fail to parse
/// like any other bad entry.
fn read_line<R: BufRead + ?Sized>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut buffer = Vec::new();
    if input.read_until(b'\n', &mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buffer).into_owned()))
}
