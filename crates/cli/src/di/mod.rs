mod jobs;
mod repositories;

pub use jobs::Jobs;
pub use repositories::Repositories;
