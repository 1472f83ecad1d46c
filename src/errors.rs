use bstr::BString;

use crate::EncodingId;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate encoding in order: {0}")]
    DuplicateEncoding(EncodingId),

    #[error("Unknown encoding name: {0}")]
    UnknownEncodingName(BString),
}
