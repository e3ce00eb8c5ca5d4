use crate::access::Operation;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Caller is not allowed to perform {operation}.")]
	Forbidden { operation: Operation },
	#[error("Candidate index retrieval failed.")]
	Retrieval(#[from] candidate_index::Error),
}
