//! API request and response models.

pub mod api_response;
pub mod flag_models;
pub mod job_models;
pub mod movie_models;
pub mod page_models;

pub use api_response::ApiResponse;
pub use flag_models::{FeatureFlagDto, SetFeatureFlagRequest};
pub use job_models::{CreateJobRequest, JobDto, JobListParams};
pub use movie_models::{CreateMovieRequest, MovieDto, MovieListParams};
pub use page_models::{
    CreatePageRequest, LookupParams, PageDto, PageListParams, UpdatePageRequest,
};
