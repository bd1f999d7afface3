use clap::ValueEnum;
use placement_matcher::error::AppError;
use placement_matcher::matching::report::views::{
    CandidateProbabilityView, CandidateView, DestinationView, EligiblePairView,
    StatisticsSummary,
};
use placement_matcher::matching::ASSIGNMENT_DAYS;
use serde::Serialize;
use std::io::Write;

/// Output shapes for record listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum ListFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Output shapes for single reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReportFormat {
    #[default]
    Text,
    Json,
}

fn write_json<W, T>(out: &mut W, value: &T) -> Result<(), AppError>
where
    W: Write + ?Sized,
    T: Serialize + ?Sized,
{
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_csv<W, T>(out: &mut W, rows: &[T]) -> Result<(), AppError>
where
    W: Write + ?Sized,
    T: Serialize,
{
    let mut writer = csv::Writer::from_writer(&mut *out);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub(crate) fn render_candidates<W: Write + ?Sized>(
    out: &mut W,
    candidates: &[CandidateView],
    format: ListFormat,
) -> Result<(), AppError> {
    match format {
        ListFormat::Json => write_json(out, candidates),
        ListFormat::Csv => write_csv(out, candidates),
        ListFormat::Text => {
            writeln!(out, "\n--- Participants ({} Graduates) ---", candidates.len())?;
            for candidate in candidates {
                writeln!(out, "{candidate}")?;
            }
            Ok(())
        }
    }
}

pub(crate) fn render_destinations<W: Write + ?Sized>(
    out: &mut W,
    destinations: &[DestinationView],
    format: ListFormat,
) -> Result<(), AppError> {
    match format {
        ListFormat::Json => write_json(out, destinations),
        ListFormat::Csv => write_csv(out, destinations),
        ListFormat::Text => {
            writeln!(
                out,
                "\n--- Countries and Requirements (Doctors Without Borders) ---"
            )?;
            for destination in destinations {
                writeln!(out, "{destination}")?;
            }
            Ok(())
        }
    }
}

pub(crate) fn render_matches<W: Write + ?Sized>(
    out: &mut W,
    pairs: &[EligiblePairView],
    format: ListFormat,
) -> Result<(), AppError> {
    match format {
        ListFormat::Json => write_json(out, pairs),
        ListFormat::Csv => write_csv(out, pairs),
        ListFormat::Text => {
            writeln!(out, "\n--- Eligible Matches (Language + Specialization) ---")?;
            writeln!(
                out,
                "Each assignment lasts {ASSIGNMENT_DAYS} days with on-site physicians.\n"
            )?;
            if pairs.is_empty() {
                writeln!(out, "No valid matches found.")?;
            }
            for pair in pairs {
                writeln!(out, "{pair}")?;
            }
            Ok(())
        }
    }
}

pub(crate) fn render_probability<W: Write + ?Sized>(
    out: &mut W,
    view: &CandidateProbabilityView,
    format: ReportFormat,
) -> Result<(), AppError> {
    if format == ReportFormat::Json {
        return write_json(out, view);
    }

    let ratio = view.probability;
    writeln!(out, "\nParticipant: {}", view.candidate.name)?;
    writeln!(
        out,
        "Language: {} | Specialization: {}",
        view.candidate.language, view.candidate.specialization
    )?;
    writeln!(
        out,
        "Matches {} out of {} countries.",
        ratio.matches(),
        ratio.total()
    )?;
    if !view.eligible_destinations.is_empty() {
        writeln!(
            out,
            "Eligible countries: {}",
            view.eligible_destinations.join(", ")
        )?;
    }
    writeln!(
        out,
        "P(match) = Number of eligible countries / {} = {} / {} = {:.2}",
        ratio.total(),
        ratio.matches(),
        ratio.total(),
        ratio.value()
    )?;
    Ok(())
}

pub(crate) fn render_statistics<W: Write + ?Sized>(
    out: &mut W,
    summary: &StatisticsSummary,
    format: ReportFormat,
) -> Result<(), AppError> {
    if format == ReportFormat::Json {
        return write_json(out, summary);
    }

    let overall = &summary.overall;
    writeln!(out, "\n--- Overall Matching Statistics ---")?;
    writeln!(
        out,
        "Total participant-country pairs: {}",
        overall.total_pairs
    )?;
    writeln!(
        out,
        "Total valid matches (language + specialization): {}",
        overall.total_matches
    )?;
    writeln!(
        out,
        "Probability that a random participant-country pair is a match:"
    )?;
    writeln!(
        out,
        "P(match) = {} / {} = {:.4}",
        overall.total_matches,
        overall.total_pairs,
        overall.probability.value()
    )?;
    writeln!(
        out,
        "Participants with no eligible country: {}",
        summary.unmatched_candidates
    )?;

    writeln!(out, "\nEligible participants per country")?;
    for entry in &summary.destination_coverage {
        writeln!(
            out,
            "- {}: {} ({:.4})",
            entry.destination.country,
            entry.eligible_candidates,
            entry.probability.value()
        )?;
    }
    Ok(())
}
