//! Turns OMDb records into Discord-flavoured markdown.
//!
//! Output is deterministic: sections and the fields inside them always come out
//! in the same order, and a field OMDb left out is printed with the [`MISSING`]
//! placeholder instead of being skipped.

use crate::utils::omdb::{MovieDetails, SearchResults};

/// Printed in place of a field the record doesn't carry.
pub const MISSING: &str = "None";

/// Spoiler delimiter understood by Discord.
pub const SPOILER: &str = "||";

/// Label appended to fields hidden behind spoiler tags.
pub const REVEAL_LABEL: &str = "(Click to Reveal)";

type Field = (&'static str, fn(&MovieDetails) -> Option<&str>);

const BASIC_INFORMATION: [Field; 3] = [
    ("Title", |m| m.title.as_deref()),
    ("Released", |m| m.released.as_deref()),
    ("Runtime", |m| m.runtime.as_deref()),
];

const RATINGS_AND_AWARDS: [Field; 4] = [
    ("Awards", |m| m.awards.as_deref()),
    ("imdbRating", |m| m.imdb_rating.as_deref()),
    ("imdbVotes", |m| m.imdb_votes.as_deref()),
    ("Metascore", |m| m.metascore.as_deref()),
];

const CAST_AND_PRODUCERS: [Field; 4] = [
    ("Director", |m| m.director.as_deref()),
    ("Writer", |m| m.writer.as_deref()),
    ("Actors", |m| m.actors.as_deref()),
    ("Production", |m| m.production.as_deref()),
];

const OTHER_INFORMATION: [Field; 5] = [
    ("imdbID", |m| m.imdb_id.as_deref()),
    ("BoxOffice", |m| m.box_office.as_deref()),
    ("Website", |m| m.website.as_deref()),
    ("Country", |m| m.country.as_deref()),
    ("Rated", |m| m.rated.as_deref()),
];

fn header(formatted: &mut String, name: &str) {
    if !formatted.is_empty() {
        formatted.push('\n');
    }
    formatted.push_str(&format!("=====**{}**=====\n", name));
}

fn line(formatted: &mut String, label: &str, value: Option<&str>) {
    formatted.push_str(&format!("**{}**: {}\n", label, value.unwrap_or(MISSING)));
}

fn fields(formatted: &mut String, details: &MovieDetails, fields: &[Field]) {
    for (label, get) in fields {
        line(formatted, label, get(details));
    }
}

/// Formats the full details of a movie into five fixed sections.
///
/// The plot is wrapped in spoiler tags so it stays hidden until clicked.
pub fn format_details(details: &MovieDetails) -> String {
    let mut formatted = String::new();

    header(&mut formatted, "BASIC INFORMATION");
    fields(&mut formatted, details, &BASIC_INFORMATION);

    header(&mut formatted, "GENRE AND PLOT");
    line(&mut formatted, "Genre", details.genre.as_deref());
    formatted.push_str(&format!(
        "**Plot {}**: {}{}{}\n",
        REVEAL_LABEL,
        SPOILER,
        details.plot.as_deref().unwrap_or(MISSING),
        SPOILER
    ));

    header(&mut formatted, "RATINGS AND AWARDS");
    fields(&mut formatted, details, &RATINGS_AND_AWARDS);
    for rating in details.ratings.iter().flatten() {
        line(
            &mut formatted,
            rating.source.as_deref().unwrap_or(MISSING),
            rating.value.as_deref(),
        );
    }

    header(&mut formatted, "CAST AND PRODUCERS");
    fields(&mut formatted, details, &CAST_AND_PRODUCERS);

    header(&mut formatted, "OTHER INFORMATION");
    fields(&mut formatted, details, &OTHER_INFORMATION);

    formatted
}

/// Formats a page of search hits, one zero-indexed line per hit.
///
/// An empty page gives an empty string; callers decide what to say instead.
pub fn format_search_results(results: &SearchResults) -> String {
    let mut formatted = String::new();

    for (i, hit) in results.hits().iter().enumerate() {
        formatted.push_str(&format!(
            "**{}**: {} ({}, {}) `IMDb ID: {}`\n",
            i,
            hit.title.as_deref().unwrap_or(MISSING),
            hit.year.as_deref().unwrap_or(MISSING),
            hit.kind.as_deref().unwrap_or(MISSING),
            hit.imdb_id.as_deref().unwrap_or(MISSING),
        ));
    }

    formatted
}
