use thiserror::Error;

#[derive(Error, Debug)]
pub enum CustomError {
	#[error("storage failure: {0}")]
	Storage(#[from] std::io::Error),

	#[error("serialization failure: {0}")]
	Serialization(#[from] serde_json::Error),

	#[error("invalid reference data: {0}")]
	InvalidReferenceData(String),
}
