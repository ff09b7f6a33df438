//! Sample OMDb responses used in tests

use serde_json::{Value, json};

/// API key the mock server expects
pub const API_KEY: &str = "test-api-key";

/// Full detail record, as OMDb returns it for `t=Inception&plot=full`
pub fn inception() -> Value {
    json!({
        "Title": "Inception",
        "Year": "2010",
        "Rated": "PG-13",
        "Released": "16 Jul 2010",
        "Runtime": "148 min",
        "Genre": "Action, Adventure, Sci-Fi",
        "Director": "Christopher Nolan",
        "Writer": "Christopher Nolan",
        "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page",
        "Plot": "Dom Cobb is a skilled thief, the absolute best in the dangerous art of extraction, stealing valuable secrets from deep within the subconscious during the dream state.",
        "Language": "English, Japanese, French",
        "Country": "United States, United Kingdom",
        "Awards": "Won 4 Oscars. 159 wins & 220 nominations total",
        "Poster": "https://m.media-amazon.com/images/M/example.jpg",
        "Ratings": [
            {"Source": "Internet Movie Database", "Value": "8.8/10"},
            {"Source": "Rotten Tomatoes", "Value": "87%"},
            {"Source": "Metacritic", "Value": "74/100"}
        ],
        "Metascore": "74",
        "imdbRating": "8.8",
        "imdbVotes": "2,600,000",
        "imdbID": "tt1375666",
        "Type": "movie",
        "DVD": "N/A",
        "BoxOffice": "$292,587,330",
        "Production": "N/A",
        "Website": "N/A",
        "Response": "True"
    })
}

/// Detail record whose plot alone is longer than a Discord message
pub fn long_plot(plot_len: usize) -> Value {
    let mut record = inception();
    record["Plot"] = Value::String("dream ".repeat(plot_len / 6 + 1)[..plot_len].to_string());
    record
}

/// Search page for `s=up`
pub fn search_up() -> Value {
    json!({
        "Search": [
            {"Title": "Up", "Year": "2009", "imdbID": "tt1049413", "Type": "movie", "Poster": "N/A"},
            {"Title": "Upstream", "Year": "2017", "imdbID": "tt0000000", "Type": "series", "Poster": "N/A"}
        ],
        "totalResults": "2",
        "Response": "True"
    })
}

/// Error envelope for a title OMDb doesn't know
pub fn not_found() -> Value {
    json!({"Response": "False", "Error": "Movie not found!"})
}
