use thiserror::Error;

use crate::catalog::CatalogError;
use crate::certificate::CertificateError;
use crate::navigation::InvalidReference;
use crate::resources::ResourceError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Resources(#[from] ResourceError),
    #[error(transparent)]
    InvalidReference(#[from] InvalidReference),
    #[error(transparent)]
    Certificate(#[from] CertificateError),
}
