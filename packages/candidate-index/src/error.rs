pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Reqwest(#[from] reqwest::Error),
	#[error("Index returned status {status}: {body}")]
	Status { status: u16, body: String },
	#[error("{message}")]
	InvalidResponse { message: String },
}
