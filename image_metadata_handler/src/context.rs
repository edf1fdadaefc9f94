use std::sync::Arc;

use crate::service::{db::DB, s3::S3};

#[derive(Clone)]
pub struct Context {
    pub s3: Arc<S3>,
    pub db: Arc<DB>,
}
