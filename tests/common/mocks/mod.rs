//! Mock implementations for external dependencies
//! `MockSource` stands in for the OMDb HTTP client

use async_trait::async_trait;
use mockall::mock;

use moobot::utils::omdb::{
    ApiResponse, MovieDetails, MovieQuery, MovieSource, OmdbError, SearchResults,
};

mock! {
    pub Source {}

    #[async_trait]
    impl MovieSource for Source {
        async fn movie_details(&self, query: MovieQuery) -> Result<ApiResponse<MovieDetails>, OmdbError>;
        async fn search(&self, term: String) -> Result<ApiResponse<SearchResults>, OmdbError>;
    }
}
